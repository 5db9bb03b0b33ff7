//! # Report Windowing
//!
//! Reports and transaction histories switch between datasets that mean
//! different things (a stock report vs. an expired report, today's sales vs.
//! all sales). Switching is stronger than a filter change: the old rows are
//! wrong for the new header and must never be paginated, not even for one
//! render.
//!
//! ## Switch Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Manager picks "Expired" while "Stock" rows are shown                   │
//! │                                                                         │
//! │  select(Expired) ──► DataSourceReplaced                                 │
//! │                        • stock rows dropped (status = Loading)          │
//! │                        • page = 1                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  fetch /reports?type=expired   (external)                               │
//! │       │                                                                 │
//! │       ├── late reply for Stock arrives ──► load(Stock, rows) ignored    │
//! │       │                                                                 │
//! │       └── reply for Expired ─────────────► load(Expired, rows) shown    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::view::{ListEvent, ListPage, ListView, Outcome};

// =============================================================================
// Report Kind
// =============================================================================

/// Manager report types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    #[default]
    Stock,
    LowStock,
    Expired,
    NearExpiry,
    Sales,
    Deliveries,
    Returns,
}

impl ReportKind {
    pub const ALL: [ReportKind; 7] = [
        ReportKind::Stock,
        ReportKind::LowStock,
        ReportKind::Expired,
        ReportKind::NearExpiry,
        ReportKind::Sales,
        ReportKind::Deliveries,
        ReportKind::Returns,
    ];

    /// Query-string value (`?type=near_expiry`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Stock => "stock",
            ReportKind::LowStock => "low_stock",
            ReportKind::Expired => "expired",
            ReportKind::NearExpiry => "near_expiry",
            ReportKind::Sales => "sales",
            ReportKind::Deliveries => "deliveries",
            ReportKind::Returns => "returns",
        }
    }

    /// Report header.
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Stock => "Stock Report",
            ReportKind::LowStock => "Low Stock Report",
            ReportKind::Expired => "Expired Products Report",
            ReportKind::NearExpiry => "Near Expiry Report",
            ReportKind::Sales => "Sales Report",
            ReportKind::Deliveries => "Deliveries Report",
            ReportKind::Returns => "Returns Report",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "report type".to_string(),
                allowed: ReportKind::ALL.iter().map(|k| k.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Transaction Scope
// =============================================================================

/// Time scope of a transaction history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TransactionScope {
    Today,
    Week,
    Month,
    #[default]
    All,
}

impl TransactionScope {
    pub const ALL: [TransactionScope; 4] = [
        TransactionScope::Today,
        TransactionScope::Week,
        TransactionScope::Month,
        TransactionScope::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionScope::Today => "today",
            TransactionScope::Week => "week",
            TransactionScope::Month => "month",
            TransactionScope::All => "all",
        }
    }
}

impl fmt::Display for TransactionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionScope {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TransactionScope::ALL
            .into_iter()
            .find(|scope| scope.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "transaction scope".to_string(),
                allowed: TransactionScope::ALL
                    .iter()
                    .map(|s| s.as_str().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Report Window
// =============================================================================

/// A list view bound to one selectable dataset.
///
/// `K` names the dataset (a [`ReportKind`] or [`TransactionScope`]). Rows
/// are always delivered through [`load`](Self::load) tagged with the key
/// they were fetched for.
///
/// ## Example
/// ```rust
/// use rxpos_core::report::{ReportKind, ReportWindow};
/// use rxpos_core::view::{ListStatus, Outcome};
/// use rxpos_core::views;
///
/// let mut window = views::report_window(ReportKind::Stock, Default::default());
/// window.load(ReportKind::Stock, vec![]);
/// assert_eq!(window.view().status(), ListStatus::Empty);
///
/// assert_eq!(window.select(ReportKind::Expired), Outcome::Invalidated);
/// assert_eq!(window.view().status(), ListStatus::Loading);
/// ```
#[derive(Debug)]
pub struct ReportWindow<K, T> {
    key: K,
    view: ListView<T>,
}

impl<K, T> ReportWindow<K, T>
where
    K: Copy + PartialEq + fmt::Debug,
{
    pub fn new(key: K, view: ListView<T>) -> Self {
        ReportWindow { key, view }
    }

    /// Dataset currently selected.
    pub fn key(&self) -> K {
        self.key
    }

    /// Switches dataset. A different key drops the held rows and resets the
    /// page even when no filter changed.
    pub fn select(&mut self, key: K) -> Outcome {
        if key == self.key {
            return Outcome::Unchanged;
        }

        debug!(from = ?self.key, to = ?key, "Report dataset switched");
        self.key = key;
        self.view.reduce(ListEvent::DataSourceReplaced)
    }

    /// Delivers rows fetched for `key`. Rows for a key that is no longer
    /// selected are dropped.
    pub fn load(&mut self, key: K, rows: Vec<T>) -> Outcome {
        if key != self.key {
            warn!(
                loaded = ?key,
                selected = ?self.key,
                count = rows.len(),
                "Ignoring rows for a dataset that is no longer selected"
            );
            return Outcome::Unchanged;
        }

        self.view.reduce(ListEvent::RecordsLoaded(rows))
    }

    /// Forwards a UI event (filters, page controls) to the inner view.
    ///
    /// Data events are refused here: rows must come through
    /// [`load`](Self::load) and dataset switches through
    /// [`select`](Self::select), so every row is checked against the key.
    pub fn reduce(&mut self, event: ListEvent<T>) -> Outcome {
        match event {
            ListEvent::RecordsLoaded(rows) => {
                warn!(
                    selected = ?self.key,
                    count = rows.len(),
                    "Ignoring untagged rows; use ReportWindow::load"
                );
                Outcome::Unchanged
            }
            ListEvent::DataSourceReplaced => {
                warn!(selected = ?self.key, "Ignoring bare invalidation; use ReportWindow::select");
                Outcome::Unchanged
            }
            event => self.view.reduce(event),
        }
    }

    pub fn view(&self) -> &ListView<T> {
        &self.view
    }

    pub fn page(&self) -> ListPage<'_, T> {
        self.view.page()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
