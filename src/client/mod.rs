//! Grafana API client
//!
//! The reconciler only talks to Grafana through [`GrafanaApi`], so the
//! HTTP implementation in [`grafana`] can be swapped for the in-memory
//! [`MockGrafanaClient`] in tests.

use async_trait::async_trait;

use crate::error::ApiResult;

pub mod auth;
pub mod grafana;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use auth::Credentials;
pub use grafana::GrafanaClient;
#[cfg(test)]
pub use mock::MockGrafanaClient;
pub use models::{OrgLookup, Organization};

/// Organization operations of the Grafana HTTP API
#[async_trait]
pub trait GrafanaApi: Send + Sync {
    /// Look up an organization by its exact name.
    ///
    /// A missing organization is `Ok(OrgLookup::NotFound)`, not an error.
    async fn find_org_by_name(&self, name: &str) -> ApiResult<OrgLookup>;

    /// Create an organization and return it with its server-assigned ID.
    async fn create_org(&self, name: &str) -> ApiResult<Organization>;

    /// Delete the organization with the given ID.
    async fn delete_org(&self, id: i64) -> ApiResult<()>;

    /// List every organization on the instance (server admin only).
    async fn list_orgs(&self) -> ApiResult<Vec<Organization>>;
}
