//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

use crate::reconcile::OrgState;

pub mod apply;
pub mod args;
pub mod completions;
pub mod context;
pub mod list;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// grafana-org - keep Grafana organizations in their declared state
#[derive(Parser, Debug)]
#[command(name = "grafana-org")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Grafana base URL (http or https)
    #[arg(long, global = true, env = "GRAFANA_URL", hide_env = true)]
    pub url: Option<String>,

    /// Grafana server admin user [default: admin]
    #[arg(long, global = true, env = "GRAFANA_USERNAME", hide_env = true)]
    pub username: Option<String>,

    /// Grafana server admin password [default: admin]
    #[arg(
        long,
        global = true,
        env = "GRAFANA_PASSWORD",
        hide_env = true,
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Output format (pretty, json)
    #[arg(
        long,
        global = true,
        env = "GRAFANA_ORG_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "GRAFANA_ORG_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GRAFANA_ORG_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ensure an organization is present or absent
    #[command(after_help = "EXAMPLES:\n  \
            grafana-org apply --name example                  # Create if missing\n  \
            grafana-org apply --name example --state absent   # Delete if present\n  \
            grafana-org apply --name example --check          # Preview only\n  \
            grafana-org apply --name example --format json    # Machine-readable result")]
    Apply {
        /// Organization name (case sensitive)
        #[arg(long = "name", short = 'n', env = "GRAFANA_ORG_NAME", hide_env = true)]
        org_name: String,

        /// Desired state of the organization
        #[arg(long, short = 's', value_enum, default_value = "present")]
        state: OrgState,

        /// Report what would change without modifying Grafana
        #[arg(long)]
        check: bool,
    },

    /// List all organizations (requires a server admin)
    #[command(visible_alias = "ls")]
    List,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   grafana-org completion bash > /etc/bash_completion.d/grafana-org
  zsh:    grafana-org completion zsh > \"${fpath[1]}/_grafana-org\"
  fish:   grafana-org completion fish > ~/.config/fish/completions/grafana-org.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
