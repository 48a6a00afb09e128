//! Configuration management for grafana-org
//!
//! Settings come from three layers, highest precedence first:
//! CLI flags (and their environment variables), the YAML config file,
//! then built-in defaults.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::client::Credentials;
use crate::client::auth::{DEFAULT_PASSWORD, DEFAULT_USERNAME};
use crate::client::grafana::DEFAULT_TIMEOUT_SECS;
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Grafana base URL, e.g. `http://localhost:3000`
    pub url: Option<String>,

    /// Basic auth user (defaults to `admin`)
    pub username: Option<String>,

    /// Basic auth password (defaults to `admin`)
    pub password: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".grafana-org").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// An explicit path must exist. A missing default file just means
    /// "no file layer".
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(PathBuf::from(path)),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(path)
                } else {
                    log::debug!("No config file at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        log::debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Apply CLI/environment overrides on top of file values
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(url) = &overrides.url {
            self.url = Some(url.clone());
        }
        if let Some(username) = &overrides.username {
            self.username = Some(username.clone());
        }
        if let Some(password) = &overrides.password {
            self.password = Some(password.clone());
        }
        self
    }

    /// Validate that the settings needed to reach Grafana are present
    pub fn validate(&self) -> Result<()> {
        match self.url.as_deref().map(str::trim) {
            None | Some("") => Err(ConfigError::MissingUrl.into()),
            Some(_) => {
                if self.timeout_secs == Some(0) {
                    return Err(ConfigError::Invalid(
                        "timeout_secs must be greater than zero".to_string(),
                    )
                    .into());
                }
                Ok(())
            }
        }
    }

    /// Basic auth credentials with defaults applied
    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.username.as_deref().unwrap_or(DEFAULT_USERNAME),
            self.password.as_deref().unwrap_or(DEFAULT_PASSWORD),
        )
    }

    /// Request timeout with the default applied
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
