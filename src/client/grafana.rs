//! Grafana HTTP API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::auth::Credentials;
use super::models::{ApiMessage, CreateOrgRequest, CreateOrgResponse, OrgLookup, Organization};
use super::GrafanaApi;
use crate::config::Config;
use crate::error::{ApiError, ApiResult, ConfigError, Result};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Grafana API client using basic auth
pub struct GrafanaClient {
    http: HttpClient,
    base_url: Url,
    credentials: Credentials,
}

impl GrafanaClient {
    /// Create a client for the Grafana instance at `base_url`.
    ///
    /// The URL may include a sub-path (e.g. `https://example.com/grafana/`)
    /// and must use `http` or `https`.
    pub fn new(base_url: &str, credentials: Credentials, timeout: Duration) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Create a client from resolved configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let url = config.url.as_deref().ok_or(ConfigError::MissingUrl)?;
        Self::new(url, config.credentials(), config.timeout())
    }

    /// Base URL of the Grafana instance
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Build an endpoint URL from path segments, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Look up an organization through `GET /api/orgs?name=`, keeping only
    /// an exact name match.
    async fn search_org_by_name(&self, name: &str) -> ApiResult<OrgLookup> {
        let mut url = self.endpoint(&["api", "orgs"]);
        url.query_pairs_mut().append_pair("name", name);
        debug!("Looking up organization '{}' via search", name);

        let response = error_for_status(self.send(self.http.get(url)).await?).await?;
        let orgs: Vec<Organization> = parse_json(response).await?;

        Ok(orgs
            .into_iter()
            .find(|org| org.name == name)
            .map_or(OrgLookup::NotFound, OrgLookup::Found))
    }

    /// Attach auth and send the request
    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request
            .header(reqwest::header::AUTHORIZATION, self.credentials.basic_auth_header())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(ApiError::from)?;
        debug!("{} {}", response.status(), response.url().path());
        Ok(response)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::Invalid(format!("Invalid Grafana URL '{}': {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::Invalid(format!(
            "Grafana URL must use http or https: {}",
            raw
        ))
        .into());
    }

    Ok(url)
}

/// Map a non-success response to an [`ApiError`]
async fn error_for_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body, status);

    Err(match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::CONFLICT => ApiError::Conflict(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::BadRequest(message),
        status if status.is_server_error() => ApiError::ServerError(message),
        status => ApiError::InvalidResponse(format!("Unexpected status code {}: {}", status, message)),
    })
}

/// Prefer Grafana's `{"message": ...}` field, then the raw body.
fn error_message(body: &str, status: StatusCode) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiMessage>(body) {
        return parsed.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Whether `name` survives as a single URL path segment.
///
/// URL path handling drops `.` and `..` segments and strips tabs and
/// newlines, so such names would never reach Grafana intact.
fn fits_path_segment(name: &str) -> bool {
    !matches!(name, "." | "..") && !name.contains(['\t', '\n', '\r'])
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
}

#[async_trait]
impl GrafanaApi for GrafanaClient {
    async fn find_org_by_name(&self, name: &str) -> ApiResult<OrgLookup> {
        if !fits_path_segment(name) {
            return self.search_org_by_name(name).await;
        }

        let url = self.endpoint(&["api", "orgs", "name", name]);
        let response = self.send(self.http.get(url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(OrgLookup::NotFound);
        }

        let org: Organization = parse_json(error_for_status(response).await?).await?;
        Ok(OrgLookup::Found(org))
    }

    async fn create_org(&self, name: &str) -> ApiResult<Organization> {
        let url = self.endpoint(&["api", "orgs"]);
        let request = self.http.post(url).json(&CreateOrgRequest { name });
        let response = error_for_status(self.send(request).await?).await?;

        let created: CreateOrgResponse = parse_json(response).await?;
        if let Some(message) = &created.message {
            debug!("Grafana: {}", message);
        }

        Ok(Organization {
            id: created.org_id,
            name: name.to_string(),
        })
    }

    async fn delete_org(&self, id: i64) -> ApiResult<()> {
        let id = id.to_string();
        let url = self.endpoint(&["api", "orgs", &id]);
        error_for_status(self.send(self.http.delete(url)).await?).await?;
        Ok(())
    }

    async fn list_orgs(&self) -> ApiResult<Vec<Organization>> {
        let url = self.endpoint(&["api", "orgs"]);
        let response = error_for_status(self.send(self.http.get(url)).await?).await?;
        parse_json(response).await
    }
}
