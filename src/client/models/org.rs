//! Organization models

use serde::{Deserialize, Serialize};

/// Organization as observed in Grafana
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Server-assigned organization ID
    pub id: i64,

    /// Organization name (case sensitive)
    pub name: String,
}

/// Result of looking up an organization by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgLookup {
    /// An organization with the requested name exists
    Found(Organization),
    /// No organization has the requested name
    NotFound,
}

/// Body of `POST /api/orgs`
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrgRequest<'a> {
    pub name: &'a str,
}

/// Response of `POST /api/orgs`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrgResponse {
    /// Newly assigned organization ID
    pub org_id: i64,

    #[serde(default)]
    pub message: Option<String>,
}

/// Grafana's generic `{"message": "..."}` body
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
