//! Basic authentication for the Grafana HTTP API
//!
//! Organization endpoints only accept a server admin user; Grafana API keys
//! and service account tokens are scoped to a single organization and are
//! rejected there.

use std::fmt;

use base64::{Engine as _, engine::general_purpose};

/// Default Grafana admin login
pub const DEFAULT_USERNAME: &str = "admin";

/// Default Grafana admin password
pub const DEFAULT_PASSWORD: &str = "admin";

/// Username and password for Grafana basic auth
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Value for the `Authorization` header
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", general_purpose::STANDARD.encode(raw))
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}
