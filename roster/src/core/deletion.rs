//! Delete confirmation workflow.
//!
//! At most one record awaits confirmation. A new intent replaces the prior
//! one without side effects; only `confirm` emits a deletion.

use crate::core::types::{Command, Record};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingDeletion(Option<Record>);

impl PendingDeletion {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn record(&self) -> Option<&Record> {
        self.0.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }

    /// Mark `record` for deletion, discarding any previous intent.
    pub fn request(record: &Record) -> Self {
        Self(Some(record.clone()))
    }

    /// Clear the intent. Nothing is emitted.
    pub fn cancel(self) -> Self {
        Self(None)
    }

    /// Clear the intent and emit the deletion, if one was pending.
    pub fn confirm(self) -> (Self, Option<Command>) {
        let command = self.0.map(|record| Command::Delete { id: record.id });
        (Self(None), command)
    }

    /// Confirmation text for the pending record.
    pub fn prompt(&self) -> Option<String> {
        self.0.as_ref().map(|record| {
            format!(
                "Are you sure you want to delete user \"{}\"? This action cannot be undone.",
                record.name_or_empty()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{named_record, scenario_records};

    /// Scenario: delete intent then cancel leaves nothing pending and emits nothing.
    #[test]
    fn cancel_clears_without_command() {
        let records = scenario_records();
        let pending = PendingDeletion::request(&records[0]);
        assert!(pending.is_pending());
        let cleared = pending.cancel();
        assert_eq!(cleared, PendingDeletion::none());
        let (_, command) = cleared.confirm();
        assert_eq!(command, None);
    }

    #[test]
    fn confirm_emits_delete_once() {
        let records = scenario_records();
        let (state, command) = PendingDeletion::request(&records[0]).confirm();
        assert_eq!(command, Some(Command::Delete { id: 1 }));
        assert!(!state.is_pending());
        assert_eq!(state.confirm().1, None);
    }

    #[test]
    fn new_intent_replaces_previous() {
        let records = scenario_records();
        let _first = PendingDeletion::request(&records[0]);
        let second = PendingDeletion::request(&records[2]);
        assert_eq!(second.record().map(|record| record.id), Some(3));
        assert_eq!(second.confirm().1, Some(Command::Delete { id: 3 }));
    }

    #[test]
    fn prompt_names_pending_user() {
        let pending = PendingDeletion::request(&named_record(4, "Eve", "eve@corp.test"));
        assert_eq!(
            pending.prompt().as_deref(),
            Some("Are you sure you want to delete user \"Eve\"? This action cannot be undone.")
        );
        assert_eq!(PendingDeletion::none().prompt(), None);
    }
}
