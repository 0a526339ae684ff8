//! Collaborator interface receiving commands emitted by the core.
//!
//! Implementations perform the real mutation and report failure through their
//! own `Result`. Callers surface those errors as-is: there is no retry and no
//! optimistic local update.

use anyhow::Result;
use tracing::debug;

use crate::core::types::{Command, Record, Role, Status, UserId};

pub trait Collaborator {
    fn edit_user(&mut self, record: &Record) -> Result<()>;
    fn change_status(&mut self, id: UserId, status: Status, role: Role) -> Result<()>;
    fn delete_user(&mut self, id: UserId) -> Result<()>;
}

/// Route `command` to the matching collaborator method.
pub fn dispatch<C: Collaborator + ?Sized>(collaborator: &mut C, command: Command) -> Result<()> {
    debug!(?command, "dispatching command");
    match command {
        Command::Edit(record) => collaborator.edit_user(&record),
        Command::ChangeStatus(request) => {
            collaborator.change_status(request.id, request.status, request.role)
        }
        Command::Delete { id } => collaborator.delete_user(id),
    }
}
