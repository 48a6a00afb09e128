//! Grafana API data models

mod org;

pub use org::{ApiMessage, CreateOrgRequest, CreateOrgResponse, OrgLookup, Organization};
