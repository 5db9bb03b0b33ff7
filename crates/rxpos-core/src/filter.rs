//! # Filter Module
//!
//! Named filter criteria and the declarative predicates each list view
//! applies to its records.
//!
//! ## How a View Filters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FilterState<T> Pipeline                            │
//! │                                                                         │
//! │  FilterCriteria (raw UI values)        FilterSpec<T> (per-view rules)   │
//! │  ────────────────────────────          ─────────────────────────────    │
//! │  search   = "amox"                     search(["name", "barcode"])     │
//! │  category = "all"      ← sentinel      exact("category", category)     │
//! │  dateFrom = "2024-03-01"               date_range(created_at)          │
//! │  dateTo   = ""         ← open                                           │
//! │           │                                      │                      │
//! │           └──────────────┬───────────────────────┘                      │
//! │                          ▼                                              │
//! │           matches(record) = AND of every active rule                    │
//! │                          │                                              │
//! │                          ▼                                              │
//! │           apply(records) = matching records, original order             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rule Semantics
//! - **search**: any configured field contains the text, case-insensitive.
//!   Blank text is no constraint.
//! - **exact**: field equals the value, or both parse to the same number.
//!   `""` and `"all"` are no constraint.
//! - **date_range**: see [`crate::dates`]. Malformed bounds are no constraint.
//!
//! An empty result is a valid result, never an error.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dates::DateRange;
use crate::ALL_SENTINEL;

/// Accessor for a string field used by search and date rules.
pub type TextField<T> = fn(&T) -> Option<&str>;

/// Accessor for a field compared by exact match.
///
/// Numeric and boolean fields return an owned rendering.
pub type KeyField<T> = fn(&T) -> Option<Cow<'_, str>>;

/// True for values that mean "no constraint" on enum/id criteria.
pub fn is_sentinel(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(ALL_SENTINEL)
}

// =============================================================================
// Filter Criteria
// =============================================================================

/// Current value of every criterion of one view, keyed by criterion name.
///
/// An absent key and an empty value are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterCriteria {
    values: BTreeMap<String, String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value. Returns true if it differs from the previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        let value = value.into();

        if self.get(&key).unwrap_or("") == value {
            return false;
        }

        if value.is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
        true
    }

    /// Raw value as typed/selected.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Trimmed value, or `None` for the `""`/`"all"` sentinel.
    pub fn active(&self, key: &str) -> Option<&str> {
        self.get(key)
            .filter(|value| !is_sentinel(value))
            .map(str::trim)
    }

    /// Trimmed search text, or `None` when blank.
    ///
    /// Unlike [`active`](Self::active), the word "all" is a real search here.
    pub fn search_text(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|text| !text.is_empty())
    }

    /// Drops every value. Returns true if anything was set.
    pub fn clear(&mut self) -> bool {
        let changed = !self.values.is_empty();
        self.values.clear();
        changed
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterCriteria {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut criteria = FilterCriteria::new();
        for (key, value) in iter {
            criteria.set(key, value);
        }
        criteria
    }
}

// =============================================================================
// Filter Spec
// =============================================================================

enum Rule<T> {
    Search {
        key: String,
        fields: Vec<TextField<T>>,
    },
    Exact {
        key: String,
        field: KeyField<T>,
    },
    Dates {
        from_key: String,
        to_key: String,
        field: TextField<T>,
    },
}

impl<T> Rule<T> {
    fn keys(&self) -> Vec<&str> {
        match self {
            Rule::Search { key, .. } | Rule::Exact { key, .. } => vec![key.as_str()],
            Rule::Dates {
                from_key, to_key, ..
            } => vec![from_key.as_str(), to_key.as_str()],
        }
    }
}

/// A rule resolved against the current criteria.
enum ActiveRule<'a, T> {
    Search {
        needle: String,
        fields: &'a [TextField<T>],
    },
    Exact {
        wanted: &'a str,
        field: KeyField<T>,
    },
    Dates {
        range: DateRange,
        field: TextField<T>,
    },
}

impl<T> ActiveRule<'_, T> {
    fn matches(&self, record: &T) -> bool {
        match self {
            ActiveRule::Search { needle, fields } => fields.iter().any(|field| {
                field(record).is_some_and(|value| value.to_lowercase().contains(needle.as_str()))
            }),
            ActiveRule::Exact { wanted, field } => {
                field(record).is_some_and(|actual| values_equal(&actual, wanted))
            }
            ActiveRule::Dates { range, field } => range.contains_raw(field(record)),
        }
    }
}

/// Exact comparison with numeric coercion: `"7"`, `"07"` and `"7.0"` all equal `7`.
fn values_equal(actual: &str, wanted: &str) -> bool {
    let actual = actual.trim();
    if actual == wanted {
        return true;
    }

    match (actual.parse::<f64>(), wanted.parse::<f64>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Declarative predicate set for one record type.
///
/// ## Example
/// ```rust
/// use std::borrow::Cow;
/// use rxpos_core::filter::{FilterCriteria, FilterSpec};
///
/// struct Drug {
///     name: String,
///     category: String,
/// }
///
/// fn name(d: &Drug) -> Option<&str> {
///     Some(&d.name)
/// }
/// fn category(d: &Drug) -> Option<Cow<'_, str>> {
///     Some(Cow::Borrowed(&d.category))
/// }
///
/// let spec = FilterSpec::<Drug>::new()
///     .search("search", &[name])
///     .exact("category", category);
///
/// let drugs = vec![
///     Drug { name: "Amoxicillin".into(), category: "Antibiotic".into() },
///     Drug { name: "Paracetamol".into(), category: "Analgesic".into() },
/// ];
///
/// let criteria: FilterCriteria = [("search", "AMOX"), ("category", "all")].into_iter().collect();
/// let hits = spec.apply(&drugs, &criteria);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Amoxicillin");
/// ```
pub struct FilterSpec<T> {
    rules: Vec<Rule<T>>,
}

impl<T> FilterSpec<T> {
    pub fn new() -> Self {
        FilterSpec { rules: Vec::new() }
    }

    /// Adds a text search over one or more string fields.
    pub fn search(mut self, key: impl Into<String>, fields: &[TextField<T>]) -> Self {
        self.rules.push(Rule::Search {
            key: key.into(),
            fields: fields.to_vec(),
        });
        self
    }

    /// Adds an exact-match criterion (category, status, staff id, ...).
    pub fn exact(mut self, key: impl Into<String>, field: KeyField<T>) -> Self {
        self.rules.push(Rule::Exact {
            key: key.into(),
            field,
        });
        self
    }

    /// Adds an inclusive date range over a timestamp field.
    pub fn date_range(
        mut self,
        from_key: impl Into<String>,
        to_key: impl Into<String>,
        field: TextField<T>,
    ) -> Self {
        self.rules.push(Rule::Dates {
            from_key: from_key.into(),
            to_key: to_key.into(),
            field,
        });
        self
    }

    /// Criterion names this spec reads.
    pub fn keys(&self) -> Vec<&str> {
        self.rules.iter().flat_map(Rule::keys).collect()
    }

    pub fn knows(&self, key: &str) -> bool {
        self.rules.iter().any(|rule| rule.keys().contains(&key))
    }

    /// True if the record satisfies every active criterion.
    pub fn matches(&self, record: &T, criteria: &FilterCriteria) -> bool {
        self.resolve(criteria).iter().all(|rule| rule.matches(record))
    }

    /// Matching records, in original order.
    pub fn apply<'r>(&self, records: &'r [T], criteria: &FilterCriteria) -> Vec<&'r T> {
        let active = self.resolve(criteria);
        records
            .iter()
            .filter(|record| active.iter().all(|rule| rule.matches(record)))
            .collect()
    }

    /// Positions of matching records, ascending.
    pub fn apply_indices(&self, records: &[T], criteria: &FilterCriteria) -> Vec<usize> {
        let active = self.resolve(criteria);
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| active.iter().all(|rule| rule.matches(record)))
            .map(|(index, _)| index)
            .collect()
    }

    /// Drops rules whose criteria are unset, so each record only runs live checks.
    fn resolve<'a>(&'a self, criteria: &'a FilterCriteria) -> Vec<ActiveRule<'a, T>> {
        self.rules
            .iter()
            .filter_map(|rule| match rule {
                Rule::Search { key, fields } => {
                    criteria.search_text(key).map(|text| ActiveRule::Search {
                        needle: text.to_lowercase(),
                        fields: fields.as_slice(),
                    })
                }
                Rule::Exact { key, field } => criteria.active(key).map(|wanted| ActiveRule::Exact {
                    wanted,
                    field: *field,
                }),
                Rule::Dates {
                    from_key,
                    to_key,
                    field,
                } => {
                    let range = DateRange::from_bounds(criteria.get(from_key), criteria.get(to_key));
                    (!range.is_unbounded()).then_some(ActiveRule::Dates {
                        range,
                        field: *field,
                    })
                }
            })
            .collect()
    }
}

impl<T> Default for FilterSpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FilterSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterSpec").field("keys", &self.keys()).finish()
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// Result of a criteria update.
///
/// `Changed` tells the owner the page must go back to 1. The filter state
/// never touches pagination itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChange {
    Changed,
    Unchanged,
}

impl FilterChange {
    #[inline]
    pub fn is_changed(self) -> bool {
        matches!(self, FilterChange::Changed)
    }
}

impl From<bool> for FilterChange {
    fn from(changed: bool) -> Self {
        if changed {
            FilterChange::Changed
        } else {
            FilterChange::Unchanged
        }
    }
}

/// Criteria plus the rules that interpret them, owned by one view.
#[derive(Debug)]
pub struct FilterState<T> {
    spec: FilterSpec<T>,
    criteria: FilterCriteria,
}

impl<T> FilterState<T> {
    pub fn new(spec: FilterSpec<T>) -> Self {
        FilterState {
            spec,
            criteria: FilterCriteria::new(),
        }
    }

    /// Starts with preset criteria (e.g. a dashboard opening "today only").
    pub fn with_criteria(spec: FilterSpec<T>, criteria: FilterCriteria) -> Self {
        FilterState { spec, criteria }
    }

    pub fn spec(&self) -> &FilterSpec<T> {
        &self.spec
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Applies one UI value change.
    pub fn set(&mut self, key: &str, value: &str) -> FilterChange {
        if !self.spec.knows(key) {
            warn!(criterion = %key, "Criterion is not used by this view");
        }

        let change = FilterChange::from(self.criteria.set(key, value));
        if change.is_changed() {
            debug!(criterion = %key, value = %value, "Filter changed");
        }
        change
    }

    /// Resets every criterion to "no constraint".
    pub fn clear(&mut self) -> FilterChange {
        let change = FilterChange::from(self.criteria.clear());
        if change.is_changed() {
            debug!("Filters cleared");
        }
        change
    }

    pub fn matches(&self, record: &T) -> bool {
        self.spec.matches(record, &self.criteria)
    }

    pub fn apply<'r>(&self, records: &'r [T]) -> Vec<&'r T> {
        self.spec.apply(records, &self.criteria)
    }

    pub fn apply_indices(&self, records: &[T]) -> Vec<usize> {
        self.spec.apply_indices(records, &self.criteria)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        name: String,
        brand: Option<String>,
        category: Option<String>,
        staff_id: i64,
        pinned: bool,
        created_at: Option<String>,
    }

    fn item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            brand: None,
            category: None,
            staff_id: 1,
            pinned: false,
            created_at: None,
        }
    }

    fn name(i: &Item) -> Option<&str> {
        Some(&i.name)
    }
    fn brand(i: &Item) -> Option<&str> {
        i.brand.as_deref()
    }
    fn created_at(i: &Item) -> Option<&str> {
        i.created_at.as_deref()
    }
    fn category(i: &Item) -> Option<Cow<'_, str>> {
        i.category.as_deref().map(Cow::Borrowed)
    }
    fn staff_id(i: &Item) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(i.staff_id.to_string()))
    }
    fn pinned(i: &Item) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(if i.pinned { "true" } else { "false" }))
    }

    fn spec() -> FilterSpec<Item> {
        FilterSpec::new()
            .search("search", &[name, brand])
            .exact("category", category)
            .exact("staffId", staff_id)
            .exact("pinned", pinned)
            .date_range("dateFrom", "dateTo", created_at)
    }

    fn ids(items: &[&Item]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_search_is_stable() {
        let items = vec![item(1, "b"), item(2, "a")];
        let mut state = FilterState::new(spec());

        state.set("search", "a");
        assert_eq!(ids(&state.apply(&items)), vec![2]);

        state.set("search", "");
        assert_eq!(ids(&state.apply(&items)), vec![1, 2]);
    }

    #[test]
    fn test_search_preserves_order_of_many_matches() {
        let items = vec![item(3, "Zinc"), item(1, "Ibuprofen"), item(2, "Cetirizine")];
        let mut state = FilterState::new(spec());

        state.set("search", "I");
        assert_eq!(ids(&state.apply(&items)), vec![3, 1, 2]);
    }

    #[test]
    fn test_search_any_field_case_insensitive() {
        let mut a = item(1, "Paracetamol 500mg");
        a.brand = Some("Biogesic".to_string());
        let b = item(2, "Ibuprofen");
        let items = vec![a, b];
        let mut state = FilterState::new(spec());

        state.set("search", "BIOG");
        assert_eq!(ids(&state.apply(&items)), vec![1]);

        state.set("search", "   ");
        assert_eq!(state.apply(&items).len(), 2);

        // "all" is literal text for search
        state.set("search", "all");
        assert!(state.apply(&items).is_empty());
    }

    #[test]
    fn test_exact_sentinels_match_everything() {
        let mut a = item(1, "a");
        a.category = Some("Antibiotic".to_string());
        let b = item(2, "b");
        let items = vec![a, b];
        let mut state = FilterState::new(spec());

        state.set("category", "all");
        assert_eq!(state.apply(&items).len(), 2);
        state.set("category", "ALL");
        assert_eq!(state.apply(&items).len(), 2);
        state.set("category", "");
        assert_eq!(state.apply(&items).len(), 2);

        state.set("category", "Antibiotic");
        assert_eq!(ids(&state.apply(&items)), vec![1]);
    }

    #[test]
    fn test_exact_numeric_coercion() {
        let mut a = item(1, "a");
        a.staff_id = 7;
        let b = item(2, "b");
        let items = vec![a, b];
        let mut state = FilterState::new(spec());

        state.set("staffId", "7");
        assert_eq!(ids(&state.apply(&items)), vec![1]);
        state.set("staffId", "07");
        assert_eq!(ids(&state.apply(&items)), vec![1]);
        state.set("staffId", "99");
        assert!(state.apply(&items).is_empty());
    }

    #[test]
    fn test_exact_boolean_field() {
        let mut a = item(1, "a");
        a.pinned = true;
        let items = vec![a, item(2, "b")];
        let mut state = FilterState::new(spec());

        state.set("pinned", "true");
        assert_eq!(ids(&state.apply(&items)), vec![1]);
        state.set("pinned", "false");
        assert_eq!(ids(&state.apply(&items)), vec![2]);
    }

    #[test]
    fn test_date_range_inclusivity() {
        let mut on_last_day = item(1, "a");
        on_last_day.created_at = Some("2024-03-05T23:59:00".to_string());
        let mut next_day = item(2, "b");
        next_day.created_at = Some("2024-03-06T00:00:01".to_string());
        let undated = item(3, "c");
        let items = vec![on_last_day, next_day, undated];
        let mut state = FilterState::new(spec());

        assert_eq!(state.apply(&items).len(), 3);

        state.set("dateTo", "2024-03-05");
        assert_eq!(ids(&state.apply(&items)), vec![1]);

        state.set("dateTo", "not-a-date");
        assert_eq!(state.apply(&items).len(), 3);
    }

    #[test]
    fn test_criteria_are_a_conjunction() {
        let mut a = item(1, "Amoxicillin");
        a.category = Some("Antibiotic".to_string());
        let mut b = item(2, "Amlodipine");
        b.category = Some("Cardio".to_string());
        let items = vec![a, b];
        let mut state = FilterState::new(spec());

        state.set("search", "am");
        state.set("category", "Cardio");
        assert_eq!(ids(&state.apply(&items)), vec![2]);
        assert!(state.matches(&items[1]));
        assert!(!state.matches(&items[0]));
        assert_eq!(state.apply_indices(&items), vec![1]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let items = vec![item(1, "a")];
        let mut state = FilterState::new(spec());
        state.set("search", "zzz");
        assert!(state.apply(&items).is_empty());
    }

    #[test]
    fn test_set_reports_changes() {
        let mut state = FilterState::new(spec());

        assert_eq!(state.set("category", "Cardio"), FilterChange::Changed);
        assert_eq!(state.set("category", "Cardio"), FilterChange::Unchanged);
        assert_eq!(state.set("category", "all"), FilterChange::Changed);
        assert_eq!(state.set("category", "Cardio"), FilterChange::Changed);

        // Absent and empty are the same value.
        assert_eq!(state.set("search", ""), FilterChange::Unchanged);

        assert_eq!(state.clear(), FilterChange::Changed);
        assert_eq!(state.clear(), FilterChange::Unchanged);
        assert!(state.criteria().is_empty());
    }

    #[test]
    fn test_unknown_criterion_constrains_nothing() {
        let items = vec![item(1, "a")];
        let mut state = FilterState::new(spec());

        assert!(state.set("warehouse", "north").is_changed());
        assert_eq!(state.apply(&items).len(), 1);
    }

    #[test]
    fn test_criteria_accessors() {
        let criteria: FilterCriteria = [("status", " pending "), ("category", "all"), ("search", " x ")]
            .into_iter()
            .collect();

        assert_eq!(criteria.get("status"), Some(" pending "));
        assert_eq!(criteria.active("status"), Some("pending"));
        assert_eq!(criteria.active("category"), None);
        assert_eq!(criteria.search_text("search"), Some("x"));
        assert_eq!(criteria.iter().count(), 3);
    }

    #[test]
    fn test_criteria_serde_is_a_plain_map() {
        let criteria: FilterCriteria = [("dateFrom", "2024-01-01")].into_iter().collect();
        let json = serde_json::to_string(&criteria).unwrap();
        assert_eq!(json, r#"{"dateFrom":"2024-01-01"}"#);

        let back: FilterCriteria = serde_json::from_str(&json).unwrap();
        assert_eq!(back, criteria);
    }

    #[test]
    fn test_spec_keys() {
        let spec = spec();
        assert_eq!(
            spec.keys(),
            vec!["search", "category", "staffId", "pinned", "dateFrom", "dateTo"]
        );
        assert!(spec.knows("dateTo"));
        assert!(!spec.knows("status"));
    }
}
