//! # List View
//!
//! One list screen's page/filter state, driven by explicit events.
//!
//! ## Event Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ListView::reduce(event) → Outcome                    │
//! │                                                                         │
//! │  Event                      State change                 Outcome        │
//! │  ─────                      ────────────                 ───────        │
//! │  FilterChanged (new value)  refilter, page = 1           Reset          │
//! │  FilterChanged (same value) nothing                      Unchanged      │
//! │  FiltersCleared             refilter, page = 1           Reset          │
//! │  PageSizeChanged            page = 1                     Reset          │
//! │  PageRequested / Next /     clamp into [1, total_pages]  Navigated or   │
//! │  Prev / GoToPageSubmitted   (bad text ignored)           Unchanged      │
//! │  RecordsLoaded              refilter, clamp page down    Refreshed      │
//! │  DataSourceReplaced         drop records, page = 1       Invalidated    │
//! │                                                                         │
//! │  Same (records, criteria, page) ⇒ same page(), always.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Loading vs. Empty
//! Records start as "not loaded". After `DataSourceReplaced` they go back to
//! "not loaded". A loaded list with zero matches is [`ListStatus::Empty`],
//! which the view renders as "no records match" rather than a spinner.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};
use crate::filter::{FilterChange, FilterCriteria, FilterState};
use crate::pagination::{PageInfo, PageSize, Paginator};
use crate::DEFAULT_MAX_PAGE_BUTTONS;

// =============================================================================
// Options
// =============================================================================

/// Per-view pagination settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    pub page_size: PageSize,
    pub max_page_buttons: usize,
}

impl ListOptions {
    pub fn new(page_size: PageSize, max_page_buttons: usize) -> ValidationResult<Self> {
        if max_page_buttons == 0 {
            return Err(ValidationError::MustBePositive {
                field: "max_page_buttons".to_string(),
            });
        }

        Ok(ListOptions {
            page_size,
            max_page_buttons,
        })
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            page_size: PageSize::default(),
            max_page_buttons: DEFAULT_MAX_PAGE_BUTTONS,
        }
    }
}

// =============================================================================
// Events & Outcomes
// =============================================================================

/// Everything that can happen to a list view.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent<T> {
    /// A filter control changed value.
    FilterChanged { key: String, value: String },
    /// "Clear filters" clicked.
    FiltersCleared,
    /// Page-size selector changed.
    PageSizeChanged(PageSize),
    /// A numbered page button (or any programmatic jump).
    PageRequested(i64),
    NextClicked,
    PrevClicked,
    /// Raw text of the "go to page" box.
    GoToPageSubmitted(String),
    /// The current data source delivered (possibly refreshed) records.
    RecordsLoaded(Vec<T>),
    /// The meaning of the dataset changed; held records are invalid.
    DataSourceReplaced,
}

impl<T> ListEvent<T> {
    /// Shorthand for [`ListEvent::FilterChanged`].
    pub fn filter(key: impl Into<String>, value: impl Into<String>) -> Self {
        ListEvent::FilterChanged {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// What a reduction did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No observable change (same filter value, boundary click, bad input).
    Unchanged,
    /// Moved to another page.
    Navigated,
    /// Returned to page 1 after a filter or page-size change.
    Reset,
    /// Records replaced by a refresh of the same source.
    Refreshed,
    /// Records discarded; the caller must fetch the new source.
    Invalidated,
}

impl Outcome {
    fn navigated(moved: bool) -> Self {
        if moved {
            Outcome::Navigated
        } else {
            Outcome::Unchanged
        }
    }
}

/// Load state of the underlying records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ListStatus {
    /// Nothing fetched yet for the current source.
    Loading,
    /// Loaded, but nothing matches.
    Empty,
    Ready,
}

/// What the view binding renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<'a, T> {
    pub status: ListStatus,
    pub info: PageInfo,
    pub items: Vec<&'a T>,
}

// =============================================================================
// List View
// =============================================================================

/// Page and filter state of one list screen or modal.
///
/// ## Invariants
/// - `matched` always holds the filter result over the current `records`
/// - The paginator's item count always equals `matched.len()`
/// - Any filter, page-size or data-source change lands on page 1 exactly once
#[derive(Debug)]
pub struct ListView<T> {
    filters: FilterState<T>,
    pager: Paginator,
    max_page_buttons: usize,
    records: Option<Vec<T>>,
    matched: Vec<usize>,
}

impl<T> ListView<T> {
    pub fn new(filters: FilterState<T>, options: ListOptions) -> Self {
        ListView {
            filters,
            pager: Paginator::new(options.page_size),
            max_page_buttons: options.max_page_buttons,
            records: None,
            matched: Vec::new(),
        }
    }

    /// Applies one event.
    pub fn reduce(&mut self, event: ListEvent<T>) -> Outcome {
        match event {
            ListEvent::FilterChanged { key, value } => {
                let change = self.filters.set(&key, &value);
                self.after_filter_change(change)
            }
            ListEvent::FiltersCleared => {
                let change = self.filters.clear();
                self.after_filter_change(change)
            }
            ListEvent::PageSizeChanged(page_size) => {
                self.pager.set_page_size(page_size);
                debug!(page_size = page_size.get(), "Page size changed, back to page 1");
                Outcome::Reset
            }
            ListEvent::PageRequested(page) => Outcome::navigated(self.pager.go_to_page(page)),
            ListEvent::NextClicked => Outcome::navigated(self.pager.next()),
            ListEvent::PrevClicked => Outcome::navigated(self.pager.prev()),
            ListEvent::GoToPageSubmitted(raw) => {
                Outcome::navigated(self.pager.submit_page_input(&raw))
            }
            ListEvent::RecordsLoaded(records) => {
                trace!(count = records.len(), "Records loaded");
                self.records = Some(records);
                self.refilter();
                Outcome::Refreshed
            }
            ListEvent::DataSourceReplaced => {
                debug!("Data source replaced, dropping held records");
                self.records = None;
                self.refilter();
                self.pager.reset();
                Outcome::Invalidated
            }
        }
    }

    fn after_filter_change(&mut self, change: FilterChange) -> Outcome {
        if !change.is_changed() {
            return Outcome::Unchanged;
        }

        self.refilter();
        self.pager.reset();
        debug!(matched = self.matched.len(), "Filters changed, back to page 1");
        Outcome::Reset
    }

    fn refilter(&mut self) {
        self.matched = match &self.records {
            Some(records) => self.filters.apply_indices(records),
            None => Vec::new(),
        };
        self.pager.set_total_items(self.matched.len());
    }

    // =========================================================================
    // Read Side
    // =========================================================================

    pub fn status(&self) -> ListStatus {
        match &self.records {
            None => ListStatus::Loading,
            Some(_) if self.matched.is_empty() => ListStatus::Empty,
            Some(_) => ListStatus::Ready,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.records.is_some()
    }

    /// Unfiltered records, if loaded.
    pub fn records(&self) -> Option<&[T]> {
        self.records.as_deref()
    }

    /// Every record passing the filters, in original order.
    ///
    /// This is what CSV export and print operate on.
    pub fn filtered(&self) -> Vec<&T> {
        match &self.records {
            Some(records) => self.matched.iter().map(|&index| &records[index]).collect(),
            None => Vec::new(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        self.filters.criteria()
    }

    pub fn filters(&self) -> &FilterState<T> {
        &self.filters
    }

    pub fn paginator(&self) -> &Paginator {
        &self.pager
    }

    pub fn options(&self) -> ListOptions {
        ListOptions {
            page_size: self.pager.page_size(),
            max_page_buttons: self.max_page_buttons,
        }
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn total_items(&self) -> usize {
        self.pager.total_items()
    }

    pub fn info(&self) -> PageInfo {
        self.pager.info(self.max_page_buttons)
    }

    /// Records on the current page plus everything the pagination bar needs.
    pub fn page(&self) -> ListPage<'_, T> {
        let items = match &self.records {
            Some(records) => self
                .pager
                .visible_slice(&self.matched)
                .iter()
                .map(|&index| &records[index])
                .collect(),
            None => Vec::new(),
        };

        ListPage {
            status: self.status(),
            info: self.info(),
            items,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterSpec;
    use std::borrow::Cow;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: String,
        status: &'static str,
    }

    fn name(r: &Row) -> Option<&str> {
        Some(&r.name)
    }
    fn status(r: &Row) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(r.status))
    }

    fn rows(count: u32) -> Vec<Row> {
        (1..=count)
            .map(|id| Row {
                id,
                name: format!("Row {}", id),
                status: if id % 2 == 0 { "even" } else { "odd" },
            })
            .collect()
    }

    fn view(page_size: usize) -> ListView<Row> {
        let spec = FilterSpec::new()
            .search("search", &[name])
            .exact("status", status);
        let options = ListOptions::new(PageSize::new(page_size).unwrap(), 5).unwrap();
        ListView::new(FilterState::new(spec), options)
    }

    fn loaded(count: u32, page_size: usize) -> ListView<Row> {
        let mut view = view(page_size);
        view.reduce(ListEvent::RecordsLoaded(rows(count)));
        view
    }

    fn page_ids(view: &ListView<Row>) -> Vec<u32> {
        view.page().items.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_loading_is_distinct_from_empty() {
        let mut view = view(10);
        assert_eq!(view.status(), ListStatus::Loading);
        assert!(!view.is_loaded());
        assert_eq!(view.info().total_pages, 1);

        view.reduce(ListEvent::RecordsLoaded(Vec::new()));
        assert_eq!(view.status(), ListStatus::Empty);
        assert_eq!(view.total_items(), 0);
        assert_eq!(view.info().total_pages, 1);
        assert!(view.page().items.is_empty());

        view.reduce(ListEvent::RecordsLoaded(rows(3)));
        assert_eq!(view.status(), ListStatus::Ready);
    }

    #[test]
    fn test_filter_change_resets_to_first_page() {
        let mut view = loaded(50, 10);
        view.reduce(ListEvent::PageRequested(3));
        assert_eq!(view.current_page(), 3);

        assert_eq!(view.reduce(ListEvent::filter("status", "all")), Outcome::Reset);
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.total_items(), 50);

        view.reduce(ListEvent::PageRequested(3));
        assert_eq!(view.reduce(ListEvent::filter("status", "odd")), Outcome::Reset);
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.total_items(), 25);

        view.reduce(ListEvent::PageRequested(3));
        assert_eq!(view.reduce(ListEvent::filter("status", "all")), Outcome::Reset);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_same_filter_value_keeps_page() {
        let mut view = loaded(50, 10);
        view.reduce(ListEvent::filter("search", "Row"));
        view.reduce(ListEvent::PageRequested(4));

        assert_eq!(view.reduce(ListEvent::filter("search", "Row")), Outcome::Unchanged);
        assert_eq!(view.current_page(), 4);
    }

    #[test]
    fn test_filter_reset_happens_once() {
        let mut view = loaded(50, 10);
        view.reduce(ListEvent::filter("status", "even"));
        view.reduce(ListEvent::NextClicked);
        assert_eq!(view.current_page(), 2);

        // A refresh of the same data after the reset must not reset again.
        view.reduce(ListEvent::RecordsLoaded(rows(50)));
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn test_clear_filters() {
        let mut view = loaded(30, 10);
        view.reduce(ListEvent::filter("search", "Row 1"));
        assert_eq!(view.total_items(), 11);

        view.reduce(ListEvent::PageRequested(2));
        assert_eq!(view.reduce(ListEvent::FiltersCleared), Outcome::Reset);
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.total_items(), 30);
        assert_eq!(view.reduce(ListEvent::FiltersCleared), Outcome::Unchanged);
    }

    #[test]
    fn test_page_size_change_resets() {
        let mut view = loaded(100, 10);
        view.reduce(ListEvent::PageRequested(7));

        let outcome = view.reduce(ListEvent::PageSizeChanged(PageSize::new(25).unwrap()));
        assert_eq!(outcome, Outcome::Reset);
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.info().total_pages, 4);
        assert_eq!(view.options().page_size.get(), 25);
        assert_eq!(page_ids(&view), (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_navigation_events() {
        let mut view = loaded(23, 10);

        assert_eq!(view.reduce(ListEvent::PrevClicked), Outcome::Unchanged);
        assert_eq!(view.reduce(ListEvent::NextClicked), Outcome::Navigated);
        assert_eq!(view.reduce(ListEvent::NextClicked), Outcome::Navigated);
        assert_eq!(view.reduce(ListEvent::NextClicked), Outcome::Unchanged);
        assert_eq!(page_ids(&view), vec![21, 22, 23]);

        let info = view.info();
        assert!(info.has_prev);
        assert!(!info.has_next);

        assert_eq!(view.reduce(ListEvent::PageRequested(-1)), Outcome::Navigated);
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.reduce(ListEvent::PageRequested(99)), Outcome::Navigated);
        assert_eq!(view.current_page(), 3);
    }

    #[test]
    fn test_go_to_page_text() {
        let mut view = loaded(100, 10);
        view.reduce(ListEvent::PageRequested(5));

        for raw in ["abc", "", "  ", "1e3", "4.5"] {
            let outcome = view.reduce(ListEvent::GoToPageSubmitted(raw.to_string()));
            assert_eq!(outcome, Outcome::Unchanged, "input {:?}", raw);
            assert_eq!(view.current_page(), 5);
        }

        view.reduce(ListEvent::GoToPageSubmitted("8".to_string()));
        assert_eq!(view.current_page(), 8);
    }

    #[test]
    fn test_refresh_shrink_clamps_and_grow_keeps_page() {
        let mut view = loaded(100, 10);
        view.reduce(ListEvent::PageRequested(9));

        assert_eq!(view.reduce(ListEvent::RecordsLoaded(rows(35))), Outcome::Refreshed);
        assert_eq!(view.current_page(), 4);
        assert_eq!(page_ids(&view), vec![31, 32, 33, 34, 35]);

        view.reduce(ListEvent::RecordsLoaded(rows(100)));
        assert_eq!(view.current_page(), 4);
    }

    #[test]
    fn test_data_source_replaced_discards_records() {
        let mut view = loaded(40, 10);
        view.reduce(ListEvent::filter("status", "odd"));
        view.reduce(ListEvent::NextClicked);

        assert_eq!(view.reduce(ListEvent::DataSourceReplaced), Outcome::Invalidated);
        assert_eq!(view.status(), ListStatus::Loading);
        assert_eq!(view.current_page(), 1);
        assert!(view.page().items.is_empty());
        assert!(view.records().is_none());

        // Criteria survive; only data is dropped.
        assert_eq!(view.criteria().get("status"), Some("odd"));

        view.reduce(ListEvent::RecordsLoaded(rows(4)));
        assert_eq!(page_ids(&view), vec![1, 3]);
    }

    #[test]
    fn test_pages_cover_filtered_sequence() {
        for page_size in [1, 3, 7, 10, 64] {
            let mut view = loaded(57, page_size);
            view.reduce(ListEvent::filter("status", "even"));

            let mut seen = Vec::new();
            for page in 1..=view.info().total_pages {
                view.reduce(ListEvent::PageRequested(page as i64));
                seen.extend(page_ids(&view));
            }

            let expected: Vec<u32> = view.filtered().iter().map(|r| r.id).collect();
            assert_eq!(seen, expected);
            assert_eq!(expected, (1..=57).filter(|id| id % 2 == 0).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_same_state_same_page() {
        let build = || {
            let mut view = loaded(60, 10);
            view.reduce(ListEvent::filter("search", "1"));
            view.reduce(ListEvent::NextClicked);
            view
        };

        assert_eq!(build().page(), build().page());
    }

    #[test]
    fn test_list_options_validation() {
        assert!(ListOptions::new(PageSize::default(), 0).is_err());
        let options = ListOptions::default();
        assert_eq!(options.page_size.get(), crate::DEFAULT_PAGE_SIZE);
        assert_eq!(options.max_page_buttons, DEFAULT_MAX_PAGE_BUTTONS);
    }
}
