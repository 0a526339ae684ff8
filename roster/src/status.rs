//! Orchestration for `roster set-status`.
//!
//! Looks up the record, requests the transition from the core, asks the
//! caller-supplied confirmation, and only then dispatches the change to the
//! collaborator. The local record set is not touched; the collaborator is the
//! source of truth.

use anyhow::{Result, anyhow};
use tracing::{info, warn};

use crate::core::transition::{
    PendingTransition, Rejection, TransitionOutcome, request_transition,
};
use crate::core::types::{Command, Record, Status, StatusChangeRequest, UserId};
use crate::io::collaborator::{Collaborator, dispatch};

/// Structured outcome of a status change attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    /// Confirmed and accepted by the collaborator.
    Applied(StatusChangeRequest),
    /// Confirmation declined; nothing dispatched.
    Declined(PendingTransition),
    /// Refused by the state machine before any prompt.
    Rejected(Rejection),
}

/// Request, confirm and dispatch a status change for `id`.
///
/// `confirm` receives the prompt text and returns whether the user approved.
/// Collaborator failures propagate unchanged.
pub fn change_status<C, F>(
    records: &[Record],
    collaborator: &mut C,
    id: UserId,
    to: Status,
    confirm: F,
) -> Result<StatusOutcome>
where
    C: Collaborator + ?Sized,
    F: FnOnce(&str) -> bool,
{
    let record = find_record(records, id)?;
    let pending = match request_transition(record, to) {
        TransitionOutcome::Pending(pending) => pending,
        TransitionOutcome::Rejected(rejection) => {
            warn!(id, status = %to, %rejection, "status change rejected");
            return Ok(StatusOutcome::Rejected(rejection));
        }
    };

    if !confirm(&pending.prompt) {
        warn!(id, status = %to, "status change declined");
        return Ok(StatusOutcome::Declined(pending));
    }

    let request = pending.confirm();
    dispatch(collaborator, Command::ChangeStatus(request))?;
    info!(id, status = %to, "status change dispatched");
    Ok(StatusOutcome::Applied(request))
}

pub(crate) fn find_record(records: &[Record], id: UserId) -> Result<&Record> {
    records
        .iter()
        .find(|record| record.id == id)
        .ok_or_else(|| anyhow!("user not found with id: {}", id))
}
