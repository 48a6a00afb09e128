//! grafana-org - idempotent management of Grafana organizations

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod reconcile;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);
    if let Err(err) = run(cli.command, &opts).await {
        log::debug!("{:?}", err);
        output::print_failure(&err, opts.format);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `--debug`.
fn init_logging(debug: bool) {
    let default_filter = if debug { "warn,grafana_org=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(command: Commands, opts: &GlobalOptions) -> Result<()> {
    match command {
        Commands::Apply {
            org_name,
            state,
            check,
        } => cli::apply::run(opts, &org_name, state, check).await,
        Commands::List => cli::list::run(opts).await,
        Commands::Completion { shell } => cli::completions::run(shell),
    }
}
