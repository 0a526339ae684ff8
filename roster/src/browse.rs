//! Browser session state and view composition.
//!
//! [`BrowseState`] holds everything the viewer controls: filter criteria, the
//! page, and the pending deletion. Each update returns the next state; derived
//! values (stats, filtered list, page window) are recomputed by
//! [`render_view`] from the current record set and never cached.

use serde::Serialize;

use crate::core::deletion::PendingDeletion;
use crate::core::filter::{FilterCriteria, RoleSelector, StatusSelector, filter_records};
use crate::core::paginate::{DEFAULT_PAGE_WINDOW, PageInfo, PageSize, PageState, page_info};
use crate::core::stats::{AggregateStats, aggregate};
use crate::core::types::{Command, Record};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    pub criteria: FilterCriteria,
    pub page: PageState,
    /// Number of page buttons in the navigation window.
    pub page_window: usize,
    pub pending_deletion: PendingDeletion,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new(PageSize::default(), DEFAULT_PAGE_WINDOW)
    }
}

impl BrowseState {
    pub fn new(page_size: PageSize, page_window: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: PageState::first(page_size),
            page_window,
            pending_deletion: PendingDeletion::none(),
        }
    }

    fn with_criteria(self, criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            page: PageState::first(self.page.size),
            ..self
        }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        let criteria = FilterCriteria {
            search: search.into(),
            ..self.criteria.clone()
        };
        self.with_criteria(criteria)
    }

    pub fn with_role(self, role: RoleSelector) -> Self {
        let criteria = FilterCriteria {
            role,
            ..self.criteria.clone()
        };
        self.with_criteria(criteria)
    }

    pub fn with_status(self, status: StatusSelector) -> Self {
        let criteria = FilterCriteria {
            status,
            ..self.criteria.clone()
        };
        self.with_criteria(criteria)
    }

    pub fn with_page_size(self, size: PageSize) -> Self {
        Self {
            page: PageState::first(size),
            ..self
        }
    }

    /// Restore the default view and return to page 1.
    pub fn reset_filters(self) -> Self {
        self.with_criteria(FilterCriteria::default())
    }

    /// Navigate to `page`; out-of-range requests leave the state unchanged.
    pub fn go_to_page(self, page: usize, filtered_len: usize) -> Self {
        Self {
            page: self.page.go_to(page, filtered_len),
            ..self
        }
    }

    pub fn next_page(self, filtered_len: usize) -> Self {
        Self {
            page: self.page.next(filtered_len),
            ..self
        }
    }

    pub fn previous_page(self, filtered_len: usize) -> Self {
        Self {
            page: self.page.previous(filtered_len),
            ..self
        }
    }

    /// Re-clamp the page after the record set was replaced.
    pub fn clamp_to(self, filtered_len: usize) -> Self {
        Self {
            page: self.page.clamp_to(filtered_len),
            ..self
        }
    }

    pub fn request_delete(self, record: &Record) -> Self {
        Self {
            pending_deletion: PendingDeletion::request(record),
            ..self
        }
    }

    pub fn cancel_delete(self) -> Self {
        Self {
            pending_deletion: self.pending_deletion.cancel(),
            ..self
        }
    }

    pub fn confirm_delete(self) -> (Self, Option<Command>) {
        let (pending_deletion, command) = self.pending_deletion.confirm();
        (
            Self {
                pending_deletion,
                ..self
            },
            command,
        )
    }

    /// Number of records passing the current criteria.
    pub fn filtered_len(&self, records: &[Record]) -> usize {
        records
            .iter()
            .filter(|record| self.criteria.matches(record))
            .count()
    }
}

/// Everything a rendering consumer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowseView<'a> {
    pub stats: AggregateStats,
    pub records: Vec<&'a Record>,
    pub page: PageInfo,
    pub pending_deletion: Option<&'a Record>,
}

/// Compose stats, filtering and pagination for `state` over `records`.
pub fn render_view<'a>(records: &'a [Record], state: &'a BrowseState) -> BrowseView<'a> {
    let filtered = filter_records(records, &state.criteria);
    let page = state.page.clamp_to(filtered.len());
    let info = page_info(&page, filtered.len(), state.page_window);
    BrowseView {
        stats: aggregate(records),
        records: page.window(&filtered).to_vec(),
        page: info,
        pending_deletion: state.pending_deletion.record(),
    }
}
