//! Apply command implementation

use log::debug;

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::output;
use crate::reconcile::{self, Mode, OrgState, OrganizationSpec};

/// Run the apply command: reconcile one organization and print the outcome
pub async fn run(opts: &GlobalOptions, org_name: &str, state: OrgState, check: bool) -> Result<()> {
    let spec = OrganizationSpec::new(org_name, state)?;
    let ctx = CommandContext::new(opts)?;

    let mode = if check { Mode::Check } else { Mode::Apply };
    debug!("Reconciling {:?} in {:?} mode", spec, mode);

    let outcome = reconcile::reconcile(&ctx.client, &spec, mode).await?;
    output::print(&outcome, ctx.format)
}
