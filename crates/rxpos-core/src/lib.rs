//! # rxpos-core: Pure List Logic for the Pharmacy Console
//!
//! Every list-bearing screen of the console (inventory, requests, returns,
//! deliveries, reports, reorder planner, POS products, transaction history,
//! staff dashboard, expiry table) shares one page/filter state machine. This
//! crate is that state machine, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RxPOS List Pipeline                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                REST API (external data source)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Vec<T>                                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rxpos-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  filter   │─►│pagination │─►│   view    │  │  report   │  │   │
//! │  │   │FilterState│  │ Paginator │  │ ListView  │  │  Window   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ListPage { items, PageInfo }           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   View binding (front-end)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pagination`] - Page size, clamping, slicing, compact page ranges
//! - [`filter`] - Filter criteria and declarative per-view predicates
//! - [`dates`] - Timestamp and date-bound parsing for date-range criteria
//! - [`view`] - `ListView` reducer driven by explicit UI events
//! - [`report`] - Report/transaction windows that invalidate on type switch
//! - [`types`] - Record shapes returned by the REST API
//! - [`views`] - Per-screen filter catalogue
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use rxpos_core::filter::{FilterSpec, FilterState};
//! use rxpos_core::view::{ListEvent, ListOptions, ListView};
//!
//! fn label(item: &String) -> Option<&str> {
//!     Some(item.as_str())
//! }
//!
//! let spec = FilterSpec::<String>::new().search("search", &[label]);
//! let mut view = ListView::new(FilterState::new(spec), ListOptions::default());
//!
//! let names: Vec<String> = (1..=25).map(|i| format!("Item {i}")).collect();
//! view.reduce(ListEvent::RecordsLoaded(names));
//! view.reduce(ListEvent::NextClicked);
//!
//! let page = view.page();
//! assert_eq!(page.info.current_page, 2);
//! assert_eq!(page.items.len(), 10);
//! assert_eq!(page.items[0], "Item 11");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dates;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod report;
pub mod types;
pub mod view;
pub mod views;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{FilterChange, FilterCriteria, FilterSpec, FilterState};
pub use pagination::{PageInfo, PageSize, Paginator};
pub use report::{ReportKind, ReportWindow, TransactionScope};
pub use view::{ListEvent, ListOptions, ListPage, ListStatus, ListView, Outcome};
pub use views::ViewId;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Page size used when a view has no configured size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the page-size selector on every list.
pub const PAGE_SIZE_OPTIONS: [usize; 6] = [5, 10, 20, 25, 50, 100];

/// Width of the numbered page-button window.
pub const DEFAULT_MAX_PAGE_BUTTONS: usize = 5;

/// Criterion value meaning "no constraint" for enum and id criteria.
///
/// The empty string means the same thing.
pub const ALL_SENTINEL: &str = "all";
