//! # View Catalogue
//!
//! Every list-bearing screen of the front-end, with the field mapping its
//! filters use. The paging and filtering machinery is shared; a view only
//! says which record fields each criterion looks at.
//!
//! ## Screens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ViewId               Record               Criteria                     │
//! │  ──────               ──────               ────────                     │
//! │  inventory            Product              search category status       │
//! │  requests             StockRequest         search status staffId dates  │
//! │  returns              ProductReturn        search status staffId dates  │
//! │  deliveries           Delivery             search status dates          │
//! │  reports              ReportRow            search category dates        │
//! │  reorder_planner      ReorderSuggestion    search category              │
//! │  pos_products         Product              search category              │
//! │  pos_transactions     Transaction          search paymentMethod status  │
//! │                                            staffId dates                │
//! │  staff_transactions   Transaction          search paymentMethod dates   │
//! │  expiry_table         ExpiryItem           search category status dates │
//! │  announcements        Announcement         search pinned dates          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::filter::{FilterSpec, FilterState};
use crate::report::{ReportKind, ReportWindow, TransactionScope};
use crate::types::{
    Announcement, Delivery, ExpiryItem, Product, ProductReturn, ReorderSuggestion, ReportRow,
    StockRequest, Transaction,
};
use crate::view::{ListOptions, ListView};

/// Standard criterion names, as used in the UI's filter controls.
pub mod criteria {
    pub const SEARCH: &str = "search";
    pub const CATEGORY: &str = "category";
    pub const STATUS: &str = "status";
    pub const DATE_FROM: &str = "dateFrom";
    pub const DATE_TO: &str = "dateTo";
    pub const STAFF_ID: &str = "staffId";
    pub const PINNED: &str = "pinned";
    pub const PAYMENT_METHOD: &str = "paymentMethod";
}

use criteria::{CATEGORY, DATE_FROM, DATE_TO, PAYMENT_METHOD, PINNED, SEARCH, STAFF_ID, STATUS};

// =============================================================================
// View Ids
// =============================================================================

/// A list screen or modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    Inventory,
    Requests,
    Returns,
    Deliveries,
    Reports,
    ReorderPlanner,
    PosProducts,
    PosTransactions,
    StaffTransactions,
    ExpiryTable,
    Announcements,
}

impl ViewId {
    pub const ALL: [ViewId; 11] = [
        ViewId::Inventory,
        ViewId::Requests,
        ViewId::Returns,
        ViewId::Deliveries,
        ViewId::Reports,
        ViewId::ReorderPlanner,
        ViewId::PosProducts,
        ViewId::PosTransactions,
        ViewId::StaffTransactions,
        ViewId::ExpiryTable,
        ViewId::Announcements,
    ];

    /// Key used in config files (`[views.reorder_planner]`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Inventory => "inventory",
            ViewId::Requests => "requests",
            ViewId::Returns => "returns",
            ViewId::Deliveries => "deliveries",
            ViewId::Reports => "reports",
            ViewId::ReorderPlanner => "reorder_planner",
            ViewId::PosProducts => "pos_products",
            ViewId::PosTransactions => "pos_transactions",
            ViewId::StaffTransactions => "staff_transactions",
            ViewId::ExpiryTable => "expiry_table",
            ViewId::Announcements => "announcements",
        }
    }

    /// Criteria the view's filter bar offers, in rule order.
    pub fn criteria(&self) -> &'static [&'static str] {
        match self {
            ViewId::Inventory => &[SEARCH, CATEGORY, STATUS],
            ViewId::Requests | ViewId::Returns => &[SEARCH, STATUS, STAFF_ID, DATE_FROM, DATE_TO],
            ViewId::Deliveries => &[SEARCH, STATUS, DATE_FROM, DATE_TO],
            ViewId::Reports => &[SEARCH, CATEGORY, DATE_FROM, DATE_TO],
            ViewId::ReorderPlanner | ViewId::PosProducts => &[SEARCH, CATEGORY],
            ViewId::PosTransactions => &[SEARCH, PAYMENT_METHOD, STATUS, STAFF_ID, DATE_FROM, DATE_TO],
            ViewId::StaffTransactions => &[SEARCH, PAYMENT_METHOD, DATE_FROM, DATE_TO],
            ViewId::ExpiryTable => &[SEARCH, CATEGORY, STATUS, DATE_FROM, DATE_TO],
            ViewId::Announcements => &[SEARCH, PINNED, DATE_FROM, DATE_TO],
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ViewId::ALL
            .into_iter()
            .find(|view| view.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "view".to_string(),
                allowed: ViewId::ALL.iter().map(|v| v.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Field Accessors
// =============================================================================

fn borrowed(value: &Option<String>) -> Option<Cow<'_, str>> {
    value.as_deref().map(Cow::Borrowed)
}

fn product_name(p: &Product) -> Option<&str> {
    Some(&p.name)
}
fn product_generic_name(p: &Product) -> Option<&str> {
    p.generic_name.as_deref()
}
fn product_brand(p: &Product) -> Option<&str> {
    p.brand.as_deref()
}
fn product_barcode(p: &Product) -> Option<&str> {
    p.barcode.as_deref()
}
fn product_category(p: &Product) -> Option<Cow<'_, str>> {
    borrowed(&p.category_name)
}
fn product_stock_status(p: &Product) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(p.stock_status().as_str()))
}

fn request_product(r: &StockRequest) -> Option<&str> {
    Some(&r.product_name)
}
fn request_staff_name(r: &StockRequest) -> Option<&str> {
    r.staff_name.as_deref()
}
fn request_notes(r: &StockRequest) -> Option<&str> {
    r.notes.as_deref()
}
fn request_status(r: &StockRequest) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(&r.status))
}
fn request_staff_id(r: &StockRequest) -> Option<Cow<'_, str>> {
    Some(Cow::Owned(r.staff_id.to_string()))
}
fn request_created_at(r: &StockRequest) -> Option<&str> {
    r.created_at.as_deref()
}

fn return_product(r: &ProductReturn) -> Option<&str> {
    Some(&r.product_name)
}
fn return_reason(r: &ProductReturn) -> Option<&str> {
    r.reason.as_deref()
}
fn return_staff_name(r: &ProductReturn) -> Option<&str> {
    r.staff_name.as_deref()
}
fn return_status(r: &ProductReturn) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(&r.status))
}
fn return_staff_id(r: &ProductReturn) -> Option<Cow<'_, str>> {
    Some(Cow::Owned(r.staff_id.to_string()))
}
fn return_created_at(r: &ProductReturn) -> Option<&str> {
    r.created_at.as_deref()
}

fn delivery_supplier(d: &Delivery) -> Option<&str> {
    Some(&d.supplier_name)
}
fn delivery_reference(d: &Delivery) -> Option<&str> {
    d.reference_number.as_deref()
}
fn delivery_status(d: &Delivery) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(&d.status))
}
/// Scheduled deliveries have no `delivered_at` yet.
fn delivery_date(d: &Delivery) -> Option<&str> {
    d.delivered_at.as_deref().or(d.created_at.as_deref())
}

fn report_product(r: &ReportRow) -> Option<&str> {
    Some(&r.product_name)
}
fn report_batch(r: &ReportRow) -> Option<&str> {
    r.batch_number.as_deref()
}
fn report_category(r: &ReportRow) -> Option<Cow<'_, str>> {
    borrowed(&r.category_name)
}
fn report_created_at(r: &ReportRow) -> Option<&str> {
    r.created_at.as_deref()
}

fn reorder_product(r: &ReorderSuggestion) -> Option<&str> {
    Some(&r.product_name)
}
fn reorder_supplier(r: &ReorderSuggestion) -> Option<&str> {
    r.supplier_name.as_deref()
}
fn reorder_category(r: &ReorderSuggestion) -> Option<Cow<'_, str>> {
    borrowed(&r.category_name)
}

fn transaction_receipt(t: &Transaction) -> Option<&str> {
    Some(&t.receipt_number)
}
fn transaction_staff_name(t: &Transaction) -> Option<&str> {
    t.staff_name.as_deref()
}
fn transaction_payment(t: &Transaction) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(&t.payment_method))
}
fn transaction_status(t: &Transaction) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(&t.status))
}
fn transaction_staff_id(t: &Transaction) -> Option<Cow<'_, str>> {
    Some(Cow::Owned(t.staff_id.to_string()))
}
fn transaction_created_at(t: &Transaction) -> Option<&str> {
    t.created_at.as_deref()
}

fn expiry_product(e: &ExpiryItem) -> Option<&str> {
    Some(&e.product_name)
}
fn expiry_batch(e: &ExpiryItem) -> Option<&str> {
    e.batch_number.as_deref()
}
fn expiry_category(e: &ExpiryItem) -> Option<Cow<'_, str>> {
    borrowed(&e.category_name)
}
fn expiry_status(e: &ExpiryItem) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(&e.status))
}
fn expiry_date(e: &ExpiryItem) -> Option<&str> {
    e.expiry_date.as_deref()
}

fn announcement_title(a: &Announcement) -> Option<&str> {
    Some(&a.title)
}
fn announcement_body(a: &Announcement) -> Option<&str> {
    Some(&a.body)
}
fn announcement_author(a: &Announcement) -> Option<&str> {
    a.author_name.as_deref()
}
fn announcement_pinned(a: &Announcement) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(if a.pinned { "true" } else { "false" }))
}
fn announcement_created_at(a: &Announcement) -> Option<&str> {
    a.created_at.as_deref()
}

// =============================================================================
// Filter Specs
// =============================================================================

pub fn inventory_filters() -> FilterSpec<Product> {
    FilterSpec::<Product>::new()
        .search(
            SEARCH,
            &[product_name, product_generic_name, product_brand, product_barcode],
        )
        .exact(CATEGORY, product_category)
        .exact(STATUS, product_stock_status)
}

/// Checkout catalogue: scanned barcodes land in the search box.
pub fn pos_product_filters() -> FilterSpec<Product> {
    FilterSpec::<Product>::new()
        .search(
            SEARCH,
            &[product_name, product_generic_name, product_brand, product_barcode],
        )
        .exact(CATEGORY, product_category)
}

pub fn request_filters() -> FilterSpec<StockRequest> {
    FilterSpec::<StockRequest>::new()
        .search(SEARCH, &[request_product, request_staff_name, request_notes])
        .exact(STATUS, request_status)
        .exact(STAFF_ID, request_staff_id)
        .date_range(DATE_FROM, DATE_TO, request_created_at)
}

pub fn return_filters() -> FilterSpec<ProductReturn> {
    FilterSpec::<ProductReturn>::new()
        .search(SEARCH, &[return_product, return_reason, return_staff_name])
        .exact(STATUS, return_status)
        .exact(STAFF_ID, return_staff_id)
        .date_range(DATE_FROM, DATE_TO, return_created_at)
}

pub fn delivery_filters() -> FilterSpec<Delivery> {
    FilterSpec::<Delivery>::new()
        .search(SEARCH, &[delivery_supplier, delivery_reference])
        .exact(STATUS, delivery_status)
        .date_range(DATE_FROM, DATE_TO, delivery_date)
}

pub fn report_filters() -> FilterSpec<ReportRow> {
    FilterSpec::<ReportRow>::new()
        .search(SEARCH, &[report_product, report_batch])
        .exact(CATEGORY, report_category)
        .date_range(DATE_FROM, DATE_TO, report_created_at)
}

pub fn reorder_filters() -> FilterSpec<ReorderSuggestion> {
    FilterSpec::<ReorderSuggestion>::new()
        .search(SEARCH, &[reorder_product, reorder_supplier])
        .exact(CATEGORY, reorder_category)
}

pub fn transaction_filters() -> FilterSpec<Transaction> {
    FilterSpec::<Transaction>::new()
        .search(SEARCH, &[transaction_receipt, transaction_staff_name])
        .exact(PAYMENT_METHOD, transaction_payment)
        .exact(STATUS, transaction_status)
        .exact(STAFF_ID, transaction_staff_id)
        .date_range(DATE_FROM, DATE_TO, transaction_created_at)
}

/// The staff dashboard only lists the signed-in cashier's own sales.
pub fn staff_transaction_filters() -> FilterSpec<Transaction> {
    FilterSpec::<Transaction>::new()
        .search(SEARCH, &[transaction_receipt])
        .exact(PAYMENT_METHOD, transaction_payment)
        .date_range(DATE_FROM, DATE_TO, transaction_created_at)
}

/// Date criteria bound the expiry date, not the creation date.
pub fn expiry_filters() -> FilterSpec<ExpiryItem> {
    FilterSpec::<ExpiryItem>::new()
        .search(SEARCH, &[expiry_product, expiry_batch])
        .exact(CATEGORY, expiry_category)
        .exact(STATUS, expiry_status)
        .date_range(DATE_FROM, DATE_TO, expiry_date)
}

pub fn announcement_filters() -> FilterSpec<Announcement> {
    FilterSpec::<Announcement>::new()
        .search(
            SEARCH,
            &[announcement_title, announcement_body, announcement_author],
        )
        .exact(PINNED, announcement_pinned)
        .date_range(DATE_FROM, DATE_TO, announcement_created_at)
}

// =============================================================================
// View Constructors
// =============================================================================

fn list<T>(spec: FilterSpec<T>, options: ListOptions) -> ListView<T> {
    ListView::new(FilterState::new(spec), options)
}

pub fn inventory_view(options: ListOptions) -> ListView<Product> {
    list(inventory_filters(), options)
}

pub fn pos_product_view(options: ListOptions) -> ListView<Product> {
    list(pos_product_filters(), options)
}

pub fn request_view(options: ListOptions) -> ListView<StockRequest> {
    list(request_filters(), options)
}

pub fn return_view(options: ListOptions) -> ListView<ProductReturn> {
    list(return_filters(), options)
}

pub fn delivery_view(options: ListOptions) -> ListView<Delivery> {
    list(delivery_filters(), options)
}

pub fn reorder_view(options: ListOptions) -> ListView<ReorderSuggestion> {
    list(reorder_filters(), options)
}

pub fn expiry_view(options: ListOptions) -> ListView<ExpiryItem> {
    list(expiry_filters(), options)
}

pub fn announcement_view(options: ListOptions) -> ListView<Announcement> {
    list(announcement_filters(), options)
}

/// Manager reports, switched by report type.
pub fn report_window(kind: ReportKind, options: ListOptions) -> ReportWindow<ReportKind, ReportRow> {
    ReportWindow::new(kind, list(report_filters(), options))
}

/// POS transaction history, switched by time scope.
pub fn transaction_window(
    scope: TransactionScope,
    options: ListOptions,
) -> ReportWindow<TransactionScope, Transaction> {
    ReportWindow::new(scope, list(transaction_filters(), options))
}

/// Staff dashboard transactions, switched by time scope.
pub fn staff_transaction_window(
    scope: TransactionScope,
    options: ListOptions,
) -> ReportWindow<TransactionScope, Transaction> {
    ReportWindow::new(scope, list(staff_transaction_filters(), options))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PageSize;
    use crate::types::decode_records;
    use crate::view::{ListEvent, ListStatus, Outcome};
    use serde_json::json;

    fn spec_keys(view: ViewId) -> Vec<String> {
        fn owned(keys: Vec<&str>) -> Vec<String> {
            keys.into_iter().map(str::to_string).collect()
        }

        match view {
            ViewId::Inventory => owned(inventory_filters().keys()),
            ViewId::Requests => owned(request_filters().keys()),
            ViewId::Returns => owned(return_filters().keys()),
            ViewId::Deliveries => owned(delivery_filters().keys()),
            ViewId::Reports => owned(report_filters().keys()),
            ViewId::ReorderPlanner => owned(reorder_filters().keys()),
            ViewId::PosProducts => owned(pos_product_filters().keys()),
            ViewId::PosTransactions => owned(transaction_filters().keys()),
            ViewId::StaffTransactions => owned(staff_transaction_filters().keys()),
            ViewId::ExpiryTable => owned(expiry_filters().keys()),
            ViewId::Announcements => owned(announcement_filters().keys()),
        }
    }

    fn products() -> Vec<Product> {
        let body = json!([
            { "id": 1, "name": "Biogesic", "generic_name": "Paracetamol", "barcode": "4800016",
              "category_name": "Analgesic", "stock_quantity": 120, "reorder_level": 20, "price_cents": 550 },
            { "id": 2, "name": "Amoxil", "generic_name": "Amoxicillin", "category_name": "Antibiotic",
              "stock_quantity": 8, "reorder_level": 10, "price_cents": 1200 },
            { "id": 3, "name": "Neozep", "generic_name": "Phenylephrine", "category_name": "Cold & Flu",
              "stock_quantity": 0, "reorder_level": 15, "price_cents": 700 },
            { "id": 4, "name": "Medicol", "generic_name": "Ibuprofen", "category_name": "Analgesic",
              "stock_quantity": 5, "reorder_level": 30, "price_cents": 650 }
        ]);
        decode_records(&body.to_string()).unwrap()
    }

    fn ids(view: &ListView<Product>) -> Vec<i64> {
        view.filtered().iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_catalogue_matches_filter_specs() {
        for view in ViewId::ALL {
            assert_eq!(spec_keys(view), view.criteria(), "view {}", view);
        }
    }

    #[test]
    fn test_view_id_round_trip() {
        for view in ViewId::ALL {
            assert_eq!(view.as_str().parse::<ViewId>().unwrap(), view);
            assert_eq!(
                serde_json::to_string(&view).unwrap(),
                format!("\"{}\"", view.as_str())
            );
        }
        assert!("dashboard".parse::<ViewId>().is_err());
    }

    #[test]
    fn test_inventory_search_and_status() {
        let mut view = inventory_view(ListOptions::default());
        view.reduce(ListEvent::RecordsLoaded(products()));

        view.reduce(ListEvent::filter(SEARCH, "amox"));
        assert_eq!(ids(&view), vec![2]);

        view.reduce(ListEvent::filter(SEARCH, "4800016"));
        assert_eq!(ids(&view), vec![1]);

        view.reduce(ListEvent::filter(SEARCH, ""));
        view.reduce(ListEvent::filter(STATUS, "low_stock"));
        assert_eq!(ids(&view), vec![2, 4]);

        view.reduce(ListEvent::filter(CATEGORY, "Analgesic"));
        assert_eq!(ids(&view), vec![4]);

        view.reduce(ListEvent::filter(STATUS, "out_of_stock"));
        assert_eq!(view.status(), ListStatus::Empty);
    }

    #[test]
    fn test_pos_products_paging() {
        let options = ListOptions::new(PageSize::new(2).unwrap(), 5).unwrap();
        let mut view = pos_product_view(options);
        view.reduce(ListEvent::RecordsLoaded(products()));

        assert_eq!(view.info().total_pages, 2);
        assert_eq!(view.reduce(ListEvent::NextClicked), Outcome::Navigated);
        let names: Vec<&str> = view.page().items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Neozep", "Medicol"]);

        view.reduce(ListEvent::filter(CATEGORY, "Analgesic"));
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.info().total_pages, 1);
    }

    #[test]
    fn test_requests_by_staff_and_date() {
        let body = json!({ "data": [
            { "id": 1, "product_name": "Biogesic", "quantity": 50, "status": "pending",
              "staff_id": 7, "created_at": "2024-03-01T09:00:00Z" },
            { "id": 2, "product_name": "Amoxil", "quantity": 20, "status": "approved",
              "staff_id": 3, "created_at": "2024-03-05T23:59:00" },
            { "id": 3, "product_name": "Neozep", "quantity": 10, "status": "pending",
              "staff_id": 7, "created_at": "2024-03-06T00:00:01" }
        ]});
        let rows: Vec<StockRequest> = decode_records(&body.to_string()).unwrap();

        let mut view = request_view(ListOptions::default());
        view.reduce(ListEvent::RecordsLoaded(rows));

        view.reduce(ListEvent::filter(STAFF_ID, "7"));
        let hits: Vec<i64> = view.filtered().iter().map(|r| r.id).collect();
        assert_eq!(hits, vec![1, 3]);

        view.reduce(ListEvent::filter(STAFF_ID, "all"));
        view.reduce(ListEvent::filter(DATE_TO, "2024-03-05"));
        let hits: Vec<i64> = view.filtered().iter().map(|r| r.id).collect();
        assert_eq!(hits, vec![1, 2]);
    }

    #[test]
    fn test_delivery_date_falls_back_to_created_at() {
        let body = json!([
            { "id": 1, "supplier_name": "Zuellig", "status": "received",
              "delivered_at": "2024-02-10T08:00:00Z", "created_at": "2024-02-01T08:00:00Z" },
            { "id": 2, "supplier_name": "Metro Drug", "status": "scheduled",
              "created_at": "2024-02-12T08:00:00Z" }
        ]);
        let rows: Vec<Delivery> = decode_records(&body.to_string()).unwrap();

        let mut view = delivery_view(ListOptions::default());
        view.reduce(ListEvent::RecordsLoaded(rows));
        view.reduce(ListEvent::filter(DATE_FROM, "2024-02-05"));

        let hits: Vec<i64> = view.filtered().iter().map(|d| d.id).collect();
        assert_eq!(hits, vec![1, 2]);
    }

    #[test]
    fn test_expiry_dates_bound_expiry() {
        let body = json!([
            { "product_id": 1, "product_name": "Amoxil", "quantity": 30,
              "expiry_date": "2024-04-30", "days_to_expiry": 20, "status": "near_expiry" },
            { "product_id": 2, "product_name": "Neozep", "quantity": 12,
              "expiry_date": "2024-03-01", "days_to_expiry": -40, "status": "expired" },
            { "product_id": 3, "product_name": "Biogesic", "quantity": 200,
              "expiry_date": "2026-01-31", "days_to_expiry": 600, "status": "safe" }
        ]);
        let rows: Vec<ExpiryItem> = decode_records(&body.to_string()).unwrap();

        let mut view = expiry_view(ListOptions::default());
        view.reduce(ListEvent::RecordsLoaded(rows));
        view.reduce(ListEvent::filter(DATE_TO, "2024-04-30"));

        let hits: Vec<i64> = view.filtered().iter().map(|e| e.product_id).collect();
        assert_eq!(hits, vec![1, 2]);

        view.reduce(ListEvent::filter(STATUS, "expired"));
        let hits: Vec<i64> = view.filtered().iter().map(|e| e.product_id).collect();
        assert_eq!(hits, vec![2]);
    }

    #[test]
    fn test_announcements_pinned() {
        let body = json!([
            { "id": 1, "title": "Inventory count Friday", "pinned": true },
            { "id": 2, "title": "New POS terminal", "body": "Counter 2 is live" },
            { "id": 3, "title": "Holiday hours", "pinned": true }
        ]);
        let rows: Vec<Announcement> = decode_records(&body.to_string()).unwrap();

        let mut view = announcement_view(ListOptions::default());
        view.reduce(ListEvent::RecordsLoaded(rows));

        view.reduce(ListEvent::filter(PINNED, "true"));
        let hits: Vec<i64> = view.filtered().iter().map(|a| a.id).collect();
        assert_eq!(hits, vec![1, 3]);

        view.reduce(ListEvent::FiltersCleared);
        view.reduce(ListEvent::filter(SEARCH, "counter"));
        let hits: Vec<i64> = view.filtered().iter().map(|a| a.id).collect();
        assert_eq!(hits, vec![2]);
    }

    #[test]
    fn test_transaction_window_filters() {
        let body = json!([
            { "id": 1, "receipt_number": "R-0001", "staff_id": 4, "payment_method": "cash",
              "status": "completed", "total_cents": 12050 },
            { "id": 2, "receipt_number": "R-0002", "staff_id": 4, "payment_method": "card",
              "status": "voided", "total_cents": 900 },
            { "id": 3, "receipt_number": "R-0003", "staff_id": 9, "payment_method": "cash",
              "status": "completed", "total_cents": 4300 }
        ]);
        let rows: Vec<Transaction> = decode_records(&body.to_string()).unwrap();

        let mut window = transaction_window(TransactionScope::Today, ListOptions::default());
        window.load(TransactionScope::Today, rows);

        window.reduce(ListEvent::filter(PAYMENT_METHOD, "cash"));
        window.reduce(ListEvent::filter(STAFF_ID, "9"));
        let hits: Vec<i64> = window.view().filtered().iter().map(|t| t.id).collect();
        assert_eq!(hits, vec![3]);

        let staff = staff_transaction_window(TransactionScope::All, ListOptions::default());
        assert_eq!(staff.key(), TransactionScope::All);
        assert_eq!(staff.view().status(), ListStatus::Loading);
    }
}
