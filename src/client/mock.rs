//! Mock Grafana API client for testing
//!
//! Keeps an in-memory set of organizations so that a reconciliation run
//! actually changes what the next lookup sees, and lets tests inject a
//! failure into a single operation.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::GrafanaApi;
use super::models::{OrgLookup, Organization};
use crate::error::{ApiError, ApiResult};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockGrafanaClient::new().with_org(1, "example").await;
///
/// let lookup = mock.find_org_by_name("example").await?;
/// assert!(matches!(lookup, OrgLookup::Found(_)));
/// ```
pub struct MockGrafanaClient {
    /// Organizations currently "stored" in Grafana
    orgs: Arc<Mutex<Vec<Organization>>>,
    /// ID handed out by the next create_org
    next_id: Arc<Mutex<i64>>,
    /// Errors to return (if any) - each consumed on first use
    lookup_error: Arc<Mutex<Option<ApiError>>>,
    create_error: Arc<Mutex<Option<ApiError>>>,
    delete_error: Arc<Mutex<Option<ApiError>>>,
    list_error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

impl Default for MockGrafanaClient {
    fn default() -> Self {
        Self {
            orgs: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
            lookup_error: Arc::new(Mutex::new(None)),
            create_error: Arc::new(Mutex::new(None)),
            delete_error: Arc::new(Mutex::new(None)),
            list_error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub find_org_by_name: usize,
    pub create_org: usize,
    pub delete_org: usize,
    pub list_orgs: usize,
}

impl CallCounts {
    /// Number of calls that could have changed remote state.
    pub fn mutations(&self) -> usize {
        self.create_org + self.delete_org
    }
}

impl MockGrafanaClient {
    /// Create a mock with no organizations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing organization.
    ///
    /// IDs handed out by later creates start above the highest seeded ID.
    pub async fn with_org(self, id: i64, name: &str) -> Self {
        self.orgs.lock().await.push(Organization {
            id,
            name: name.to_string(),
        });
        let mut next_id = self.next_id.lock().await;
        *next_id = (*next_id).max(id + 1);
        drop(next_id);
        self
    }

    /// Make the next lookup fail.
    pub async fn with_lookup_error(self, error: ApiError) -> Self {
        *self.lookup_error.lock().await = Some(error);
        self
    }

    /// Make the next create fail.
    pub async fn with_create_error(self, error: ApiError) -> Self {
        *self.create_error.lock().await = Some(error);
        self
    }

    /// Make the next delete fail.
    pub async fn with_delete_error(self, error: ApiError) -> Self {
        *self.delete_error.lock().await = Some(error);
        self
    }

    /// Make the next list fail.
    pub async fn with_list_error(self, error: ApiError) -> Self {
        *self.list_error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Snapshot of the stored organizations.
    pub async fn orgs(&self) -> Vec<Organization> {
        self.orgs.lock().await.clone()
    }

    /// Remove an organization behind the reconciler's back.
    pub async fn remove_externally(&self, name: &str) {
        self.orgs.lock().await.retain(|org| org.name != name);
    }

    async fn take_error(slot: &Mutex<Option<ApiError>>) -> ApiResult<()> {
        match slot.lock().await.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl GrafanaApi for MockGrafanaClient {
    async fn find_org_by_name(&self, name: &str) -> ApiResult<OrgLookup> {
        self.call_count.lock().await.find_org_by_name += 1;
        Self::take_error(&self.lookup_error).await?;

        let orgs = self.orgs.lock().await;
        Ok(orgs
            .iter()
            .find(|org| org.name == name)
            .cloned()
            .map_or(OrgLookup::NotFound, OrgLookup::Found))
    }

    async fn create_org(&self, name: &str) -> ApiResult<Organization> {
        self.call_count.lock().await.create_org += 1;
        Self::take_error(&self.create_error).await?;

        let mut orgs = self.orgs.lock().await;
        if orgs.iter().any(|org| org.name == name) {
            return Err(ApiError::Conflict("Organization name taken".to_string()));
        }

        let mut next_id = self.next_id.lock().await;
        let org = Organization {
            id: *next_id,
            name: name.to_string(),
        };
        *next_id += 1;
        orgs.push(org.clone());

        Ok(org)
    }

    async fn delete_org(&self, id: i64) -> ApiResult<()> {
        self.call_count.lock().await.delete_org += 1;
        Self::take_error(&self.delete_error).await?;

        let mut orgs = self.orgs.lock().await;
        let before = orgs.len();
        orgs.retain(|org| org.id != id);
        if orgs.len() == before {
            return Err(ApiError::NotFound("Organization not found".to_string()));
        }

        Ok(())
    }

    async fn list_orgs(&self) -> ApiResult<Vec<Organization>> {
        self.call_count.lock().await.list_orgs += 1;
        Self::take_error(&self.list_error).await?;

        Ok(self.orgs.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_create_assigns_ids_after_seeded_orgs() {
        let mock = MockGrafanaClient::new().with_org(5, "existing").await;

        let org = mock.create_org("new").await.unwrap();

        assert_eq!(org.id, 6);
        assert_eq!(mock.orgs().await.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_rejects_duplicate_name() {
        let mock = MockGrafanaClient::new().with_org(1, "example").await;

        let result = mock.create_org("example").await;

        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockGrafanaClient::new()
            .with_lookup_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.find_org_by_name("example").await.is_err());
        assert_eq!(
            mock.find_org_by_name("example").await.unwrap(),
            OrgLookup::NotFound
        );
        assert_eq!(mock.call_counts().await.find_org_by_name, 2);
    }

    #[tokio::test]
    async fn test_mock_list_error() {
        let mock = MockGrafanaClient::new()
            .with_org(1, "example")
            .await
            .with_list_error(ApiError::Forbidden)
            .await;

        assert!(matches!(mock.list_orgs().await, Err(ApiError::Forbidden)));
        assert_eq!(mock.list_orgs().await.unwrap().len(), 1);
        assert_eq!(mock.call_counts().await.list_orgs, 2);
    }

    #[tokio::test]
    async fn test_mock_delete_missing_id() {
        let mock = MockGrafanaClient::new();

        let result = mock.delete_org(3).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
