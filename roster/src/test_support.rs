//! Test-only helpers for constructing user records and collaborators.

use anyhow::{Result, bail};

use crate::core::types::{Command, Record, Role, Status, StatusChangeRequest, UserId};
use crate::io::collaborator::Collaborator;

/// Create a record with no name or email.
pub fn record(id: UserId, role: Role, status: Status) -> Record {
    Record {
        id,
        name: None,
        email: None,
        role,
        status,
    }
}

/// Create an active employee with explicit name and email.
pub fn named_record(id: UserId, name: &str, email: &str) -> Record {
    Record {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        ..record(id, Role::Employee, Status::Active)
    }
}

/// Active employee 1, terminated agent 2, inactive HR 3.
pub fn scenario_records() -> Vec<Record> {
    vec![
        record(1, Role::Employee, Status::Active),
        record(2, Role::Agent, Status::Terminated),
        record(3, Role::Hr, Status::Inactive),
    ]
}

/// `count` active employees with ids `1..=count` and deterministic names.
pub fn employees(count: UserId) -> Vec<Record> {
    (1..=count)
        .map(|id| named_record(id, &format!("User {}", id), &format!("user{}@corp.test", id)))
        .collect()
}

/// Write `records` to `records.json` inside a fresh temp directory.
pub fn records_fixture(records: &[Record]) -> Result<(tempfile::TempDir, std::path::PathBuf)> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("records.json");
    crate::io::record_store::write_records(&path, records)?;
    Ok((temp, path))
}

/// Collaborator that records every command it receives.
///
/// With `fail_with` set, every call fails with that message and records nothing.
#[derive(Debug, Default)]
pub struct RecordingCollaborator {
    pub received: Vec<Command>,
    pub fail_with: Option<String>,
}

impl RecordingCollaborator {
    fn push(&mut self, command: Command) -> Result<()> {
        if let Some(message) = &self.fail_with {
            bail!("{}", message);
        }
        self.received.push(command);
        Ok(())
    }
}

impl Collaborator for RecordingCollaborator {
    fn edit_user(&mut self, record: &Record) -> Result<()> {
        self.push(Command::Edit(record.clone()))
    }

    fn change_status(&mut self, id: UserId, status: Status, role: Role) -> Result<()> {
        self.push(Command::ChangeStatus(StatusChangeRequest { id, status, role }))
    }

    fn delete_user(&mut self, id: UserId) -> Result<()> {
        self.push(Command::Delete { id })
    }
}
