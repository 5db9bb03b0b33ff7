//! # Pagination Module
//!
//! Deterministic slicing of a record sequence into pages and safe
//! navigation between them.
//!
//! ## Derived State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Stored:   page ≥ 1, page_size > 0, total_items ≥ 0                     │
//! │                                                                         │
//! │  total_pages  = max(1, ceil(total_items / page_size))                   │
//! │  current_page = clamp(page, 1, total_pages)                             │
//! │  start_index  = (current_page - 1) * page_size                          │
//! │  end_index    = min(start_index + page_size, total_items)               │
//! │                                                                         │
//! │  Example: 42 items, page_size 10, page 9 (drifted)                      │
//! │    total_pages = 5, current_page = 5, slice = [40..42]                  │
//! │                                                                         │
//! │  Empty list: 0 items ⇒ "page 1 of 1", slice = []                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! Nothing here panics or returns an error at runtime. Out-of-range pages
//! are clamped, non-numeric "go to page" text is ignored. Only building a
//! [`PageSize`] can fail, and that happens at configuration time.
//!
//! ## Usage
//! ```rust
//! use rxpos_core::pagination::{PageSize, Paginator};
//!
//! let mut pager = Paginator::new(PageSize::new(5).unwrap());
//! pager.set_total_items(100);
//!
//! pager.go_to_page(-3);
//! assert_eq!(pager.current_page(), 1);
//!
//! pager.submit_page_input("999");
//! assert_eq!(pager.current_page(), 20);
//! assert_eq!(pager.compact_page_range(5), vec![16, 17, 18, 19, 20]);
//! ```

use std::fmt;
use std::num::IntErrorKind;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::trace;
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};
use crate::{DEFAULT_MAX_PAGE_BUTTONS, DEFAULT_PAGE_SIZE};

// =============================================================================
// Page Size
// =============================================================================

/// Number of records per page. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    /// Creates a page size, rejecting zero.
    pub fn new(size: usize) -> ValidationResult<Self> {
        if size == 0 {
            return Err(ValidationError::MustBePositive {
                field: "page_size".to_string(),
            });
        }

        Ok(PageSize(size))
    }

    /// Parses the value of a page-size selector.
    ///
    /// ## Example
    /// ```rust
    /// use rxpos_core::pagination::PageSize;
    ///
    /// assert_eq!(PageSize::parse(" 25 ").unwrap().get(), 25);
    /// assert!(PageSize::parse("0").is_err());
    /// assert!(PageSize::parse("ten").is_err());
    /// ```
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let raw = raw.trim();
        let size = raw
            .parse::<usize>()
            .map_err(|_| ValidationError::InvalidFormat {
                field: "page_size".to_string(),
                reason: format!("'{}' is not a whole number", raw),
            })?;

        Self::new(size)
    }

    /// Creates a page size restricted to an enumerated option set.
    pub fn from_options(size: usize, options: &[usize]) -> ValidationResult<Self> {
        if !options.contains(&size) {
            return Err(ValidationError::NotAllowed {
                field: "page_size".to_string(),
                allowed: options.iter().map(ToString::to_string).collect(),
            });
        }

        Self::new(size)
    }

    /// Returns the size as a plain number.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize(DEFAULT_PAGE_SIZE)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ValidationError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        PageSize::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Page Math
// =============================================================================

/// Number of pages needed for `total_items`; never less than 1.
pub fn total_pages(total_items: usize, page_size: PageSize) -> usize {
    total_items.div_ceil(page_size.get()).max(1)
}

/// Clamps any requested page number into `[1, total_pages]`.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let total_pages = total_pages.max(1);

    if requested < 1 {
        return 1;
    }

    usize::try_from(requested).map_or(total_pages, |page| page.min(total_pages))
}

/// Parses "go to page" input.
///
/// Integer text overflowing `i64` saturates so it still clamps to an edge.
/// Anything else (empty, `abc`, `2.5`) yields `None`.
pub fn parse_page_input(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(page) => Some(page),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Contiguous window of page numbers for the numbered page buttons.
///
/// ## Algorithm
/// ```text
/// start = max(1, current - floor(max_buttons / 2))
/// end   = min(total_pages, start + max_buttons - 1)
/// start = max(1, end - max_buttons + 1)      ← keeps the window full near the end
///
/// total_pages = 20, max_buttons = 5
///   current 1  → [1, 2, 3, 4, 5]
///   current 10 → [8, 9, 10, 11, 12]
///   current 20 → [16, 17, 18, 19, 20]
/// ```
pub fn compact_page_range(current_page: usize, total_pages: usize, max_buttons: usize) -> Vec<usize> {
    if max_buttons == 0 {
        return Vec::new();
    }

    let total_pages = total_pages.max(1);
    let current_page = current_page.clamp(1, total_pages);

    let start = current_page.saturating_sub(max_buttons / 2).max(1);
    let end = start.saturating_add(max_buttons - 1).min(total_pages);
    let start = (end + 1).saturating_sub(max_buttons).max(1);

    (start..=end).collect()
}

// =============================================================================
// Paginator
// =============================================================================

/// Page state of one list view.
///
/// ## Invariants
/// - `current_page()` is always in `[1, total_pages()]`
/// - `total_pages() >= 1`, even for an empty list
/// - `start_index() <= end_index() <= total_items()`
/// - Shrinking the data clamps the page down; growing it never advances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: PageSize,
    total_items: usize,
}

impl Paginator {
    /// Creates a paginator on page 1 with no items.
    pub fn new(page_size: PageSize) -> Self {
        Paginator {
            page: 1,
            page_size,
            total_items: 0,
        }
    }

    #[inline]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[inline]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.page.clamp(1, self.total_pages())
    }

    /// Index of the first record on the current page.
    pub fn start_index(&self) -> usize {
        (self.current_page() - 1) * self.page_size.get()
    }

    /// One past the index of the last record on the current page.
    pub fn end_index(&self) -> usize {
        self.start_index()
            .saturating_add(self.page_size.get())
            .min(self.total_items)
    }

    pub fn range(&self) -> Range<usize> {
        self.start_index()..self.end_index()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    /// Returns the current page's records.
    ///
    /// Bounded by `records.len()` as well, so a sequence shorter than
    /// `total_items` yields a short (possibly empty) slice instead of panicking.
    pub fn visible_slice<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        let end = self.end_index().min(records.len());
        let start = self.start_index().min(end);
        &records[start..end]
    }

    /// Updates the item count after a filter or data refresh.
    ///
    /// The stored page is normalised here, so data that shrinks and then
    /// grows back does not jump to the old page.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.page = self.current_page();
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Returns to page 1. Returns true if the page moved.
    pub fn reset(&mut self) -> bool {
        let moved = self.current_page() != 1;
        self.page = 1;
        moved
    }

    /// Moves to `requested`, clamped into range. Returns true if the page moved.
    pub fn go_to_page(&mut self, requested: i64) -> bool {
        let target = clamp_page(requested, self.total_pages());
        self.move_to(target)
    }

    /// Handles a "go to page" text submit. Non-numeric input is a no-op.
    pub fn submit_page_input(&mut self, raw: &str) -> bool {
        match parse_page_input(raw) {
            Some(requested) => self.go_to_page(requested),
            None => {
                trace!(input = %raw, "Ignoring non-numeric page input");
                false
            }
        }
    }

    /// Advances one page; no-op on the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.move_to(self.current_page() + 1)
    }

    /// Goes back one page; no-op on page 1.
    pub fn prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.move_to(self.current_page() - 1)
    }

    pub fn compact_page_range(&self, max_buttons: usize) -> Vec<usize> {
        compact_page_range(self.current_page(), self.total_pages(), max_buttons)
    }

    /// Snapshot for rendering.
    pub fn info(&self, max_buttons: usize) -> PageInfo {
        PageInfo {
            current_page: self.current_page(),
            total_pages: self.total_pages(),
            total_items: self.total_items,
            page_size: self.page_size.get(),
            start_index: self.start_index(),
            end_index: self.end_index(),
            has_prev: self.has_prev(),
            has_next: self.has_next(),
            page_range: self.compact_page_range(max_buttons),
        }
    }

    fn move_to(&mut self, target: usize) -> bool {
        let moved = target != self.current_page();
        self.page = target;
        if moved {
            trace!(page = target, "Page changed");
        }
        moved
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Paginator::new(PageSize::default())
    }
}

// =============================================================================
// Page Info
// =============================================================================

/// Everything a pagination bar needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub start_index: usize,
    pub end_index: usize,
    /// Previous button enabled.
    pub has_prev: bool,
    /// Next button enabled.
    pub has_next: bool,
    /// Numbered buttons to show.
    pub page_range: Vec<usize>,
}

impl PageInfo {
    /// Footer text, e.g. "Showing 11-20 of 42".
    pub fn summary(&self) -> String {
        if self.total_items == 0 {
            return "Showing 0 of 0".to_string();
        }

        format!(
            "Showing {}-{} of {}",
            self.start_index + 1,
            self.end_index,
            self.total_items
        )
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Paginator::default().info(DEFAULT_MAX_PAGE_BUTTONS)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
