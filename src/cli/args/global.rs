//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};
use crate::config::ConfigOverrides;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; the config file is merged in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.grafana-org/config.yaml)
    pub config: Option<String>,

    /// Connection settings from flags or environment
    pub overrides: ConfigOverrides,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            overrides: ConfigOverrides {
                url: cli.url.clone(),
                username: cli.username.clone(),
                password: cli.password.clone(),
            },
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
