//! Error types for grafana-org

use thiserror::Error;

/// Result type alias for grafana-org operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for calls made through the Grafana API client
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    #[error("Invalid organization spec: {0}")]
    InvalidSpec(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Grafana HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check the Grafana username and password.")]
    Unauthorized,

    #[error("Access denied. Organization management requires a Grafana server admin.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to Grafana".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Failures of a single reconciliation run.
///
/// Every variant is terminal: nothing is retried and no outcome is produced.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Current state could not be determined; no mutation was attempted.
    #[error("Failed to look up organization '{name}': {source}")]
    Lookup {
        name: String,
        #[source]
        source: ApiError,
    },

    /// Grafana rejected the create call; remote state may be ambiguous.
    #[error("Failed to create organization '{name}': {source}")]
    Create {
        name: String,
        #[source]
        source: ApiError,
    },

    /// Grafana rejected the delete call; remote state may be ambiguous.
    #[error("Failed to delete organization '{name}' (id {id}): {source}")]
    Delete {
        name: String,
        id: i64,
        #[source]
        source: ApiError,
    },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Grafana URL not configured. Pass --url, set GRAFANA_URL, or add `url` to the config file.")]
    MissingUrl,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
