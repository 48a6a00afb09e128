//! Command execution context
//!
//! Loads configuration, applies CLI overrides and builds the Grafana client
//! so handlers don't repeat that setup.

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::GrafanaClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing the client and runtime options.
pub struct CommandContext {
    /// Grafana API client
    pub client: GrafanaClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file cannot be loaded, no Grafana URL is
    /// configured, or the URL is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?.with_overrides(&opts.overrides);
        config.validate()?;

        let client = GrafanaClient::from_config(&config)?;
        log::debug!("Using Grafana at {}", client.base_url());

        Ok(Self {
            client,
            format: opts.format,
        })
    }
}
