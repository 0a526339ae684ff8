//! Fixed-size pagination over a filtered, order-preserving sequence.
//!
//! Pages are 1-indexed. Navigation outside `[1, total_pages]` is a no-op, and
//! `total_pages` is never below 1 so an empty result still has a page 1.

use std::fmt;
use std::num::NonZeroUsize;

use serde::Serialize;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default number of page buttons shown by navigation controls.
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// Positive page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Returns `None` for zero.
    pub fn new(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub current: usize,
    pub size: PageSize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::first(PageSize::default())
    }
}

/// `max(1, ceil(filtered_len / size))`.
pub fn total_pages(filtered_len: usize, size: PageSize) -> usize {
    filtered_len.div_ceil(size.get()).max(1)
}

impl PageState {
    pub fn first(size: PageSize) -> Self {
        Self { current: 1, size }
    }

    pub fn total_pages(&self, filtered_len: usize) -> usize {
        total_pages(filtered_len, self.size)
    }

    /// Move to `page` if it lies in `[1, total_pages]`; otherwise unchanged.
    pub fn go_to(self, page: usize, filtered_len: usize) -> Self {
        if page == 0 || page > self.total_pages(filtered_len) {
            return self;
        }
        Self {
            current: page,
            ..self
        }
    }

    pub fn next(self, filtered_len: usize) -> Self {
        self.go_to(self.current.saturating_add(1), filtered_len)
    }

    pub fn previous(self, filtered_len: usize) -> Self {
        self.go_to(self.current.saturating_sub(1), filtered_len)
    }

    /// Re-establish `1 <= current <= total_pages` after the filtered set changed size.
    pub fn clamp_to(self, filtered_len: usize) -> Self {
        Self {
            current: self.current.clamp(1, self.total_pages(filtered_len)),
            ..self
        }
    }

    /// Zero-based `[start, end)` offsets of the current page, clamped to `len`.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let size = self.size.get();
        let start = self.current.saturating_sub(1).saturating_mul(size).min(len);
        let end = self.current.saturating_mul(size).min(len);
        (start, end)
    }

    /// Slice of `items` visible on the current page.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.bounds(items.len());
        &items[start..end]
    }
}

/// Page numbers for navigation controls.
///
/// Shows at most `width` numbers. With more pages than that, the window is
/// centered on `current` and shifted to stay within `[1, total_pages]`.
pub fn page_numbers(current: usize, total_pages: usize, width: usize) -> Vec<usize> {
    let width = width.max(1);
    if total_pages <= width {
        return (1..=total_pages).collect();
    }
    let start = current
        .saturating_sub(width / 2)
        .max(1)
        .min(total_pages - width + 1);
    (start..start + width).collect()
}

/// "Showing X to Y of Z" metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowingRange {
    pub from: usize,
    pub to: usize,
    pub of: usize,
}

impl fmt::Display for ShowingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} to {} of {}", self.from, self.to, self.of)
    }
}

/// Pagination metadata for rendering consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub page_numbers: Vec<usize>,
    pub showing: ShowingRange,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Pagination metadata for `state`, clamped to the current `filtered_len`.
pub fn page_info(state: &PageState, filtered_len: usize, window_width: usize) -> PageInfo {
    let state = state.clamp_to(filtered_len);
    let total = state.total_pages(filtered_len);
    let (start, end) = state.bounds(filtered_len);
    let from = if filtered_len == 0 { 0 } else { start + 1 };
    PageInfo {
        current_page: state.current,
        total_pages: total,
        page_size: state.size.get(),
        page_numbers: page_numbers(state.current, total, window_width),
        showing: ShowingRange {
            from,
            to: end,
            of: filtered_len,
        },
        has_previous: state.current > 1,
        has_next: state.current < total,
    }
}
