//! End-to-end browsing scenarios driven through the public API.
//!
//! Record set: active employee 1, terminated agent 2, inactive HR 3.

use roster::browse::{BrowseState, render_view};
use roster::core::filter::StatusSelector;
use roster::core::paginate::{DEFAULT_PAGE_WINDOW, PageSize};
use roster::core::transition::available_transitions;
use roster::core::types::{Command, Role, Status, StatusChangeRequest};
use roster::status::{StatusOutcome, change_status};
use roster::test_support::{RecordingCollaborator, scenario_records};

fn ids(records: &[&roster::core::types::Record]) -> Vec<u64> {
    records.iter().map(|record| record.id).collect()
}

#[test]
fn default_filters_hide_terminated_and_stats_exclude_it() {
    let records = scenario_records();
    let state = BrowseState::default();
    let view = render_view(&records, &state);
    assert_eq!(ids(&view.records), vec![1, 3]);
    assert_eq!(view.stats.total_users, 2);
    assert_eq!(view.stats.terminated_users, 1);
}

#[test]
fn explicit_terminated_status_reveals_terminated() {
    let records = scenario_records();
    let state = BrowseState::default().with_status(StatusSelector::Only(Status::Terminated));
    assert_eq!(ids(&render_view(&records, &state).records), vec![2]);

    let state = state.reset_filters();
    assert_eq!(ids(&render_view(&records, &state).records), vec![1, 3]);
}

#[test]
fn single_record_pages_show_second_record() {
    let records = scenario_records();
    let size = PageSize::new(1).expect("page size");
    let state = BrowseState::new(size, DEFAULT_PAGE_WINDOW);
    let len = state.filtered_len(&records);
    let state = state.go_to_page(2, len);

    let view = render_view(&records, &state);
    assert_eq!(ids(&view.records), vec![3]);
    assert_eq!(view.page.showing.to_string(), "Showing 2 to 2 of 2");

    // Page 0 and total_pages + 1 are ignored.
    assert_eq!(state.clone().go_to_page(0, len).page.current, 2);
    assert_eq!(state.go_to_page(3, len).page.current, 2);
}

#[test]
fn delete_intent_then_cancel_emits_nothing() {
    let records = scenario_records();
    let state = BrowseState::default().request_delete(&records[0]).cancel_delete();
    assert!(render_view(&records, &state).pending_deletion.is_none());
    let (_, command) = state.confirm_delete();
    assert!(command.is_none());
}

#[test]
fn terminating_hr_user_dispatches_once_and_is_terminal() {
    let mut records = scenario_records();
    let mut recorder = RecordingCollaborator::default();

    let outcome = change_status(&records, &mut recorder, 3, Status::Terminated, |_| true)
        .expect("change status");
    let request = StatusChangeRequest {
        id: 3,
        status: Status::Terminated,
        role: Role::Hr,
    };
    assert_eq!(outcome, StatusOutcome::Applied(request));
    assert_eq!(recorder.received, vec![Command::ChangeStatus(request)]);

    // The collaborator refreshes the set; afterwards no transition is offered.
    records[2].status = Status::Terminated;
    assert!(available_transitions(&records[2]).is_empty());
    let outcome = change_status(&records, &mut recorder, 3, Status::Active, |_| true)
        .expect("second change");
    assert!(matches!(outcome, StatusOutcome::Rejected(_)));
    assert_eq!(recorder.received.len(), 1);
}
