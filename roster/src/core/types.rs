//! Shared deterministic types for the record browser core.
//!
//! These types define stable contracts between core components and the
//! collaborators that supply records or receive commands. They must not depend
//! on external state or I/O.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable, unique record identifier assigned by the record source.
pub type UserId = u64;

/// Fixed set of roles a user record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Employee,
    Agent,
    #[serde(rename = "HR")]
    Hr,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Employee, Role::Agent, Role::Hr];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Agent => "Agent",
            Role::Hr => "HR",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `hr`, `Hr` and `HR` all parse to [`Role::Hr`].
impl FromStr for Role {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| format!("invalid role: {}", raw))
    }
}

/// Lifecycle status of a user record.
///
/// `Terminated` is terminal: no transition leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    Inactive,
    Terminated,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Active, Status::Inactive, Status::Terminated];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
            Status::Terminated => "Terminated",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Status::Terminated
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| format!("invalid status: {}", raw))
    }
}

/// A user record as supplied by the record source.
///
/// `name` and `email` may be absent; matching treats them as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    pub status: Status,
}

impl Record {
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}

/// Status change approved by the user, in the shape the persistence API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    pub id: UserId,
    pub status: Status,
    pub role: Role,
}

/// Side effect emitted by the core for an injected collaborator to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Edit affordance; part of the contract but not emitted by any control.
    Edit(Record),
    ChangeStatus(StatusChangeRequest),
    Delete { id: UserId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("hr".parse::<Role>(), Ok(Role::Hr));
        assert_eq!("Agent".parse::<Role>(), Ok(Role::Agent));
        assert_eq!(" EMPLOYEE ".parse::<Role>(), Ok(Role::Employee));
        assert_eq!(
            "manager".parse::<Role>(),
            Err("invalid role: manager".to_string())
        );
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("terminated".parse::<Status>(), Ok(Status::Terminated));
        assert!("gone".parse::<Status>().is_err());
    }

    /// Wire names follow the persistence API (`HR`, not `Hr`).
    #[test]
    fn record_serializes_display_names() {
        let record = Record {
            id: 7,
            name: Some("Ada".to_string()),
            email: None,
            role: Role::Hr,
            status: Status::Inactive,
        };
        let value = serde_json::to_value(&record).expect("serialize");
        assert_eq!(value["role"], "HR");
        assert_eq!(value["status"], "Inactive");
    }

    #[test]
    fn record_tolerates_missing_name_and_email() {
        let record: Record =
            serde_json::from_str(r#"{"id":1,"role":"Agent","status":"Active"}"#).expect("parse");
        assert_eq!(record.name_or_empty(), "");
        assert_eq!(record.email_or_empty(), "");
    }

    #[test]
    fn status_change_request_matches_api_body() {
        let request = StatusChangeRequest {
            id: 3,
            status: Status::Terminated,
            role: Role::Hr,
        };
        let value = serde_json::to_value(request).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({"id": 3, "status": "Terminated", "role": "HR"})
        );
    }
}
