//! Organization reconciliation
//!
//! Compares the desired lifecycle of one organization with what Grafana
//! reports and issues at most one mutating call. Every run re-reads remote
//! state; nothing is cached between runs.
//!
//! Lookup-then-act is not atomic. Two runs racing on the same name can both
//! decide to create (or delete), and the loser's call is rejected by Grafana.
//! That rejection is returned as an error and never retried here.

use log::{debug, info};
use serde::Serialize;

use crate::client::{GrafanaApi, OrgLookup};
use crate::error::{Error, ReconcileError, Result};

pub const MSG_CREATED: &str = "Organization created";
pub const MSG_EXISTS: &str = "Organization already exists";
pub const MSG_DELETED: &str = "Organization deleted";
pub const MSG_MISSING: &str = "Organization does not exist";
pub const MSG_WILL_CREATE: &str = "Organization will be created";
pub const MSG_WILL_DELETE: &str = "Organization will be deleted";

/// Desired lifecycle of an organization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OrgState {
    /// The organization must exist
    #[default]
    Present,
    /// The organization must not exist
    Absent,
}

/// Desired state of a single organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationSpec {
    name: String,
    state: OrgState,
}

impl OrganizationSpec {
    /// Build a spec, rejecting blank names.
    ///
    /// The name is kept verbatim: Grafana organization names are case
    /// sensitive and surrounding whitespace is significant.
    pub fn new(name: impl Into<String>, state: OrgState) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidSpec(
                "organization name must not be empty".to_string(),
            ));
        }
        Ok(Self { name, state })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> OrgState {
        self.state
    }
}

/// Whether a run may mutate Grafana
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Perform the planned create or delete
    #[default]
    Apply,
    /// Report what would change without mutating anything
    Check,
}

/// What a run has to do to reach the desired state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Delete { id: i64 },
    Keep { org_id: Option<i64> },
}

/// Decide the action for a desired state and a lookup result.
pub fn plan(state: OrgState, lookup: &OrgLookup) -> Action {
    match (state, lookup) {
        (OrgState::Present, OrgLookup::NotFound) => Action::Create,
        (OrgState::Present, OrgLookup::Found(org)) => Action::Keep {
            org_id: Some(org.id),
        },
        (OrgState::Absent, OrgLookup::Found(org)) => Action::Delete { id: org.id },
        (OrgState::Absent, OrgLookup::NotFound) => Action::Keep { org_id: None },
    }
}

/// Result of one reconciliation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Whether this run changed (or in check mode, would change) Grafana
    pub changed: bool,

    /// Human-readable summary
    pub msg: String,

    /// Organization ID, when one applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,

    /// The requested organization name, verbatim
    pub org_name: String,
}

impl Outcome {
    fn new(spec: &OrganizationSpec, changed: bool, msg: &str, org_id: Option<i64>) -> Self {
        Self {
            changed,
            msg: msg.to_string(),
            org_id,
            org_name: spec.name().to_string(),
        }
    }
}

/// Bring one organization to its desired state.
///
/// Performs one lookup and at most one create or delete, in that order.
/// Any API failure ends the run without an outcome.
pub async fn reconcile<C>(
    client: &C,
    spec: &OrganizationSpec,
    mode: Mode,
) -> std::result::Result<Outcome, ReconcileError>
where
    C: GrafanaApi + ?Sized,
{
    let lookup = client
        .find_org_by_name(spec.name())
        .await
        .map_err(|source| ReconcileError::Lookup {
            name: spec.name().to_string(),
            source,
        })?;

    let action = plan(spec.state(), &lookup);
    debug!(
        "Organization '{}': lookup={:?}, desired={:?}, action={:?}",
        spec.name(),
        lookup,
        spec.state(),
        action
    );

    let outcome = match (action, mode) {
        (Action::Keep { org_id }, _) => {
            let msg = match spec.state() {
                OrgState::Present => MSG_EXISTS,
                OrgState::Absent => MSG_MISSING,
            };
            Outcome::new(spec, false, msg, org_id)
        }
        (Action::Create, Mode::Check) => Outcome::new(spec, true, MSG_WILL_CREATE, None),
        (Action::Delete { id }, Mode::Check) => {
            Outcome::new(spec, true, MSG_WILL_DELETE, Some(id))
        }
        (Action::Create, Mode::Apply) => {
            let org = client
                .create_org(spec.name())
                .await
                .map_err(|source| ReconcileError::Create {
                    name: spec.name().to_string(),
                    source,
                })?;
            info!("Created organization '{}' (id {})", org.name, org.id);
            Outcome::new(spec, true, MSG_CREATED, Some(org.id))
        }
        (Action::Delete { id }, Mode::Apply) => {
            client
                .delete_org(id)
                .await
                .map_err(|source| ReconcileError::Delete {
                    name: spec.name().to_string(),
                    id,
                    source,
                })?;
            info!("Deleted organization '{}' (id {})", spec.name(), id);
            Outcome::new(spec, true, MSG_DELETED, None)
        }
    };

    Ok(outcome)
}
