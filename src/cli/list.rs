//! List command implementation

use log::debug;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::GrafanaApi;
use crate::error::Result;
use crate::output;

/// Run the list command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let orgs = ctx.client.list_orgs().await?;
    debug!("Fetched {} organizations", orgs.len());

    output::print(&orgs, ctx.format)
}
