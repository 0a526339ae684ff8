//! Listing helpers for `roster list` and `roster stats`.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::browse::{BrowseState, render_view};
use crate::core::filter::FilterCriteria;
use crate::core::paginate::{PageInfo, PageSize};
use crate::core::stats::{AggregateStats, aggregate};
use crate::core::types::Record;
use crate::io::record_store::load_records;

/// What the viewer asked to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub criteria: FilterCriteria,
    pub page: usize,
    pub page_size: PageSize,
    pub page_window: usize,
}

/// Owned page of records with metadata, ready for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListOutcome {
    pub stats: AggregateStats,
    pub records: Vec<Record>,
    pub page: PageInfo,
}

/// Build the requested page from an in-memory record set.
///
/// An out-of-range `page` leaves the session on page 1.
pub fn list_records(records: &[Record], request: &ListRequest) -> ListOutcome {
    let state = BrowseState::new(request.page_size, request.page_window)
        .with_search(request.criteria.search.clone())
        .with_role(request.criteria.role)
        .with_status(request.criteria.status);
    let filtered_len = state.filtered_len(records);
    let state = state.go_to_page(request.page, filtered_len);
    let view = render_view(records, &state);
    ListOutcome {
        stats: view.stats,
        records: view.records.into_iter().cloned().collect(),
        page: view.page,
    }
}

/// Load records from disk and build the requested page.
pub fn list_from_file(path: &Path, request: &ListRequest) -> Result<ListOutcome> {
    let records = load_records(path).context("load records for listing")?;
    Ok(list_records(&records, request))
}

/// Load records from disk and compute stats.
pub fn stats_from_file(path: &Path) -> Result<AggregateStats> {
    let records = load_records(path).context("load records for stats")?;
    Ok(aggregate(&records))
}

impl ListOutcome {
    /// Plain-text table: one line per record, then pagination lines.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if self.records.is_empty() {
            out.push_str("No users found\n");
        }
        for record in &self.records {
            let _ = writeln!(
                out,
                "{:>6}  {:<24}  {:<32}  {:<8}  {}",
                record.id,
                record.name_or_empty(),
                record.email_or_empty(),
                record.role,
                record.status
            );
        }
        let pages = self
            .page
            .page_numbers
            .iter()
            .map(|page| {
                if *page == self.page.current_page {
                    format!("[{}]", page)
                } else {
                    page.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "{}", self.page.showing);
        let _ = writeln!(
            out,
            "Page {} of {}: {}",
            self.page.current_page, self.page.total_pages, pages
        );
        out
    }
}
