//! # Date Handling
//!
//! Parsing for record timestamps and for the `dateFrom` / `dateTo` criteria.
//!
//! ## Bound Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  dateFrom = 2024-03-01     dateTo = 2024-03-05                         │
//! │                                                                         │
//! │  2024-02-29 23:59:59   ✗  before start of dateFrom                     │
//! │  2024-03-01 00:00:00   ✓  start of day, inclusive                      │
//! │  2024-03-05 23:59:00   ✓  anything on dateTo's calendar day            │
//! │  2024-03-05 23:59:59.9 ✓                                               │
//! │  2024-03-06 00:00:01   ✗  next day                                     │
//! │  "" / "n/a" / missing  ✗  excluded once either bound is set            │
//! │                                                                         │
//! │  Malformed bound text ("03/05", "soon") = that bound is not set         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Day Boundaries Are UTC
//! Timestamps with an offset are normalised to UTC before their calendar day
//! is taken; naive timestamps are taken as-is. Day boundaries are therefore
//! UTC days, not the shop's local day: at +08:00, a sale at
//! `2024-03-06T01:00:00+08:00` falls on 2024-03-05.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Naive timestamp layouts the API is known to emit.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a record timestamp. Returns `None` for anything unrecognised.
///
/// ## Example
/// ```rust
/// use rxpos_core::dates::parse_timestamp;
///
/// assert!(parse_timestamp("2024-03-05T10:15:00Z").is_some());
/// assert!(parse_timestamp("2024-03-05 10:15:00").is_some());
/// assert!(parse_timestamp("2024-03-05").is_some());
/// assert!(parse_timestamp("yesterday").is_none());
/// ```
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Parses a criterion bound (the value of a date input).
///
/// A full timestamp is accepted and truncated to its calendar day.
pub fn parse_date_bound(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| parse_timestamp(raw).map(|dt| dt.date()))
}

// =============================================================================
// Date Range
// =============================================================================

/// Inclusive calendar-day range built from `dateFrom` / `dateTo` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateRange {
    /// Builds a range from raw criterion values.
    ///
    /// Missing or malformed text leaves that side open.
    pub fn from_bounds(from: Option<&str>, to: Option<&str>) -> Self {
        DateRange {
            from: from.and_then(parse_date_bound),
            to: to.and_then(parse_date_bound),
        }
    }

    /// True when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// First included day.
    pub fn start(&self) -> Option<NaiveDate> {
        self.from
    }

    /// Last included day.
    pub fn end(&self) -> Option<NaiveDate> {
        self.to
    }

    /// Checks a parsed timestamp against both bounds.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        let day = timestamp.date();
        self.from.is_none_or(|from| day >= from) && self.to.is_none_or(|to| day <= to)
    }

    /// Checks a raw record field.
    ///
    /// With no bounds everything passes, including missing dates. Once a
    /// bound is set, a missing or unparseable date fails.
    pub fn contains_raw(&self, raw: Option<&str>) -> bool {
        if self.is_unbounded() {
            return true;
        }

        raw.and_then(parse_timestamp)
            .is_some_and(|timestamp| self.contains(timestamp))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
