//! Shell completion generation

use clap::CommandFactory;

use crate::cli::{Cli, Shell};
use crate::error::Result;

/// Write static completions for `shell` to stdout
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
