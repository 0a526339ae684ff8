//! Aggregate statistics over the full record set.

use serde::Serialize;

use crate::core::types::{Record, Role, Status};

/// Read-only snapshot of record counts.
///
/// Totals (`total_users` and per-role counts) exclude Terminated records.
/// Status counts cover the full set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub total_users: usize,
    pub total_employees: usize,
    pub total_agents: usize,
    pub total_hr: usize,
    pub active_users: usize,
    pub inactive_users: usize,
    pub terminated_users: usize,
}

/// Compute stats in a single pass. An empty set yields all zeros.
pub fn aggregate(records: &[Record]) -> AggregateStats {
    let mut stats = AggregateStats::default();
    for record in records {
        match record.status {
            Status::Active => stats.active_users += 1,
            Status::Inactive => stats.inactive_users += 1,
            Status::Terminated => {
                stats.terminated_users += 1;
                continue;
            }
        }

        stats.total_users += 1;
        match record.role {
            Role::Employee => stats.total_employees += 1,
            Role::Agent => stats.total_agents += 1,
            Role::Hr => stats.total_hr += 1,
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{record, scenario_records};

    #[test]
    fn empty_set_yields_zero_stats() {
        assert_eq!(aggregate(&[]), AggregateStats::default());
    }

    /// Terminated records count toward `terminated_users` only.
    #[test]
    fn scenario_excludes_terminated_from_totals() {
        let stats = aggregate(&scenario_records());
        assert_eq!(
            stats,
            AggregateStats {
                total_users: 2,
                total_employees: 1,
                total_agents: 0,
                total_hr: 1,
                active_users: 1,
                inactive_users: 1,
                terminated_users: 1,
            }
        );
    }

    #[test]
    fn role_totals_sum_to_total_users() {
        let records = vec![
            record(1, Role::Agent, Status::Active),
            record(2, Role::Agent, Status::Terminated),
            record(3, Role::Hr, Status::Inactive),
            record(4, Role::Employee, Status::Inactive),
            record(5, Role::Employee, Status::Terminated),
        ];
        let stats = aggregate(&records);
        let non_terminated = records
            .iter()
            .filter(|record| record.status != Status::Terminated)
            .count();
        assert_eq!(stats.total_users, non_terminated);
        assert_eq!(
            stats.total_employees + stats.total_agents + stats.total_hr,
            stats.total_users
        );
        assert_eq!(
            stats.active_users + stats.inactive_users + stats.terminated_users,
            records.len()
        );
    }
}
