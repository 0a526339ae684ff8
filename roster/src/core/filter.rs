//! Compound record filtering.
//!
//! Three independent predicates are ANDed together:
//! - search text: case-insensitive substring of name or email;
//! - role selector: any role, or exact equality;
//! - status selector: the default view hides Terminated records, a specific
//!   status (including Terminated) matches exactly.
//!
//! Role has no default exclusion; only status does.

use serde::Serialize;

use crate::core::types::{Record, Role, Status};

/// Role filter: pass everything or one specific role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum RoleSelector {
    #[default]
    Any,
    Only(Role),
}

/// Status filter mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum StatusSelector {
    /// Every status except Terminated.
    #[default]
    DefaultView,
    Only(Status),
}

/// User-controlled filter inputs. `Default` is the "no filter" view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub search: String,
    pub role: RoleSelector,
    pub status: StatusSelector,
}

impl FilterCriteria {
    /// True if `record` passes all three predicates.
    pub fn matches(&self, record: &Record) -> bool {
        matches_search(&self.search, record)
            && matches_role(self.role, record)
            && matches_status(self.status, record)
    }
}

/// Apply `criteria` to `records`, preserving input order.
pub fn filter_records<'a>(records: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .collect()
}

fn matches_search(search: &str, record: &Record) -> bool {
    if search.trim().is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    record.name_or_empty().to_lowercase().contains(&needle)
        || record.email_or_empty().to_lowercase().contains(&needle)
}

fn matches_role(selector: RoleSelector, record: &Record) -> bool {
    match selector {
        RoleSelector::Any => true,
        RoleSelector::Only(role) => record.role == role,
    }
}

fn matches_status(selector: StatusSelector, record: &Record) -> bool {
    match selector {
        StatusSelector::DefaultView => !record.status.is_terminal(),
        StatusSelector::Only(status) => record.status == status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{named_record, record, scenario_records};

    fn ids(records: &[&Record]) -> Vec<u64> {
        records.iter().map(|record| record.id).collect()
    }

    /// Default view hides Terminated records.
    #[test]
    fn default_criteria_hide_terminated() {
        let records = scenario_records();
        let filtered = filter_records(&records, &FilterCriteria::default());
        assert_eq!(ids(&filtered), vec![1, 3]);
    }

    /// Selecting Terminated explicitly reveals exactly the terminated records.
    #[test]
    fn explicit_terminated_reveals_terminated_only() {
        let records = scenario_records();
        let criteria = FilterCriteria {
            status: StatusSelector::Only(Status::Terminated),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_records(&records, &criteria)), vec![2]);
    }

    #[test]
    fn role_selector_matches_exactly() {
        let records = scenario_records();
        let criteria = FilterCriteria {
            role: RoleSelector::Only(Role::Hr),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_records(&records, &criteria)), vec![3]);
    }

    /// Role filter does not lift the default Terminated exclusion.
    #[test]
    fn role_selector_keeps_default_status_exclusion() {
        let records = scenario_records();
        let criteria = FilterCriteria {
            role: RoleSelector::Only(Role::Agent),
            ..FilterCriteria::default()
        };
        assert!(filter_records(&records, &criteria).is_empty());
    }

    #[test]
    fn search_matches_name_or_email_case_insensitively() {
        let records = vec![
            named_record(1, "Alice Smith", "alice@corp.test"),
            named_record(2, "Bob Jones", "bob@SMITHWORKS.test"),
            named_record(3, "Carol", "carol@corp.test"),
        ];
        let criteria = FilterCriteria {
            search: "SMITH".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_records(&records, &criteria)), vec![1, 2]);
    }

    #[test]
    fn blank_search_matches_everything() {
        let records = scenario_records();
        let criteria = FilterCriteria {
            search: "   ".to_string(),
            status: StatusSelector::Only(Status::Terminated),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_records(&records, &criteria)), vec![2]);
    }

    /// Absent name/email are empty strings: no panic, no match on non-blank search.
    #[test]
    fn missing_fields_do_not_match_search() {
        let records = vec![record(1, Role::Agent, Status::Active)];
        let criteria = FilterCriteria {
            search: "a".to_string(),
            ..FilterCriteria::default()
        };
        assert!(filter_records(&records, &criteria).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = vec![
            named_record(1, "Ann", "ann@corp.test"),
            named_record(2, "Dan", "dan@corp.test"),
            named_record(3, "Anne", "anne@else.test"),
        ];
        let criteria = FilterCriteria {
            search: "ann".to_string(),
            ..FilterCriteria::default()
        };
        let once: Vec<Record> = filter_records(&records, &criteria)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_records(&once, &criteria);
        assert_eq!(ids(&twice), vec![1, 3]);
        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn every_status_selector_combination_respects_terminal_rule() {
        let records: Vec<Record> = Status::ALL
            .into_iter()
            .enumerate()
            .flat_map(|(index, status)| {
                Role::ALL
                    .into_iter()
                    .enumerate()
                    .map(move |(offset, role)| record((index * 3 + offset) as u64, role, status))
            })
            .collect();

        let default_view = filter_records(&records, &FilterCriteria::default());
        assert!(default_view.iter().all(|record| !record.status.is_terminal()));
        assert_eq!(default_view.len(), 6);

        for status in Status::ALL {
            let criteria = FilterCriteria {
                status: StatusSelector::Only(status),
                ..FilterCriteria::default()
            };
            let filtered = filter_records(&records, &criteria);
            assert_eq!(filtered.len(), 3);
            assert!(filtered.iter().all(|record| record.status == status));
        }
    }
}
