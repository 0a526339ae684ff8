//! Orchestration for `roster delete`.

use anyhow::Result;
use tracing::{info, warn};

use crate::core::deletion::PendingDeletion;
use crate::core::types::{Record, UserId};
use crate::io::collaborator::{Collaborator, dispatch};
use crate::status::find_record;

/// Structured outcome of a delete attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(UserId),
    Cancelled(UserId),
}

/// Mark `id` for deletion, ask `confirm`, and dispatch on approval.
///
/// `confirm` receives the prompt text. Declining cancels the pending deletion
/// and emits nothing.
pub fn delete_user<C, F>(
    records: &[Record],
    collaborator: &mut C,
    id: UserId,
    confirm: F,
) -> Result<DeleteOutcome>
where
    C: Collaborator + ?Sized,
    F: FnOnce(&str) -> bool,
{
    let record = find_record(records, id)?;
    let pending = PendingDeletion::request(record);
    let prompt = pending.prompt().unwrap_or_default();

    if !confirm(&prompt) {
        warn!(id, "delete cancelled");
        return Ok(DeleteOutcome::Cancelled(id));
    }

    let (_, command) = pending.confirm();
    if let Some(command) = command {
        dispatch(collaborator, command)?;
        info!(id, "delete dispatched");
    }
    Ok(DeleteOutcome::Deleted(id))
}
