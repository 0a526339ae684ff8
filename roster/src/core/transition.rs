//! Status transition state machine with two-step confirmation.
//!
//! Legal transitions:
//! - `Active <-> Inactive`
//! - `Active -> Terminated`, `Inactive -> Terminated`
//!
//! `Terminated` is terminal. A transition is first requested, producing a
//! [`PendingTransition`] with the prompt to show, and only a confirmed pending
//! transition emits a [`StatusChangeRequest`]. The record itself is never
//! modified here; the persistence collaborator owns that.

use std::fmt;

use crate::core::types::{Record, Role, Status, StatusChangeRequest, UserId};

/// Target statuses offered for `record`. Empty for Terminated records.
pub fn available_transitions(record: &Record) -> Vec<Status> {
    if record.status.is_terminal() {
        return Vec::new();
    }
    Status::ALL
        .into_iter()
        .filter(|status| *status != record.status)
        .collect()
}

/// True if `from -> to` is a legal transition.
pub fn is_allowed(from: Status, to: Status) -> bool {
    !from.is_terminal() && from != to
}

/// Why a transition request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The record is Terminated; no further transitions exist.
    Terminal,
    /// Target equals the current status.
    Unchanged,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Terminal => f.write_str("terminated users cannot be modified again"),
            Rejection::Unchanged => f.write_str("user already has the requested status"),
        }
    }
}

/// A requested transition awaiting explicit confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransition {
    pub id: UserId,
    pub role: Role,
    pub from: Status,
    pub to: Status,
    pub prompt: String,
}

impl PendingTransition {
    /// True for the irreversible move to Terminated.
    pub fn is_termination(&self) -> bool {
        self.to.is_terminal()
    }

    /// Approve the transition, yielding the request for the collaborator.
    pub fn confirm(self) -> StatusChangeRequest {
        StatusChangeRequest {
            id: self.id,
            status: self.to,
            role: self.role,
        }
    }

    /// Decline the transition. Nothing is emitted.
    pub fn decline(self) {}
}

/// Result of [`request_transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    Pending(PendingTransition),
    Rejected(Rejection),
}

/// First step of a status change: validate and describe it.
pub fn request_transition(record: &Record, to: Status) -> TransitionOutcome {
    if record.status.is_terminal() {
        return TransitionOutcome::Rejected(Rejection::Terminal);
    }
    if record.status == to {
        return TransitionOutcome::Rejected(Rejection::Unchanged);
    }
    TransitionOutcome::Pending(PendingTransition {
        id: record.id,
        role: record.role,
        from: record.status,
        to,
        prompt: transition_prompt(record, to),
    })
}

/// Confirmation text. Termination is worded distinctly and flagged irreversible.
pub fn transition_prompt(record: &Record, to: Status) -> String {
    let action = if to.is_terminal() {
        "Terminate"
    } else {
        "Change status to"
    };
    let mut prompt = format!(
        "{} user \"{}\" ({}) to {}?",
        action,
        record.name_or_empty(),
        record.email_or_empty(),
        to
    );
    if to.is_terminal() {
        prompt.push_str(" This cannot be undone.");
    }
    prompt
}
