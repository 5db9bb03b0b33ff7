//! # Record Types
//!
//! Row shapes returned by the pharmacy REST API, one per list view.
//!
//! ## Record Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         List Records                                    │
//! │                                                                         │
//! │  Manager console            POS                    Analytics            │
//! │  ───────────────            ───                    ─────────            │
//! │  Product (inventory)        Product (catalogue)    ReportRow            │
//! │  StockRequest               Transaction            ReorderSuggestion    │
//! │  ProductReturn                                     ExpiryItem           │
//! │  Delivery                                                               │
//! │  Announcement                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conventions
//! - Ids are numeric, as issued by the server
//! - Money is integer cents
//! - Timestamps stay raw strings; the filter layer parses them and treats
//!   unparseable values as "no date"
//! - Aggregates (discounts, stock levels, report totals) are computed
//!   server-side and only displayed here

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;

// =============================================================================
// Product
// =============================================================================

/// A product in the pharmacy catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: i64,
    /// Brand/display name.
    pub name: String,
    /// Active ingredient (e.g. "Amoxicillin").
    #[serde(default)]
    pub generic_name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    /// Units on hand.
    #[serde(default)]
    pub stock_quantity: i64,
    /// Threshold at or below which the product counts as low stock.
    #[serde(default)]
    pub reorder_level: i64,
    /// Selling price in cents.
    pub price_cents: i64,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Product {
    /// Stock bucket shown in the inventory status column.
    pub fn stock_status(&self) -> StockStatus {
        if self.stock_quantity <= 0 {
            StockStatus::OutOfStock
        } else if self.stock_quantity <= self.reorder_level {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

/// Stock bucket derived from quantity and reorder level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }
}

// =============================================================================
// Staff Workflows
// =============================================================================

/// A staff request to restock a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StockRequest {
    pub id: i64,
    pub product_name: String,
    pub quantity: i64,
    /// pending | approved | rejected | fulfilled
    pub status: String,
    pub staff_id: i64,
    #[serde(default)]
    pub staff_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A product returned by a customer or pulled from the shelf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductReturn {
    pub id: i64,
    pub product_name: String,
    pub quantity: i64,
    #[serde(default)]
    pub reason: Option<String>,
    /// pending | approved | rejected
    pub status: String,
    pub staff_id: i64,
    #[serde(default)]
    pub staff_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// An inbound supplier delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Delivery {
    pub id: i64,
    pub supplier_name: String,
    #[serde(default)]
    pub reference_number: Option<String>,
    /// scheduled | received | partial | cancelled
    pub status: String,
    #[serde(default)]
    pub item_count: i64,
    #[serde(default)]
    pub total_cents: i64,
    #[serde(default)]
    pub delivered_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A manager announcement shown on the staff dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

// =============================================================================
// Sales
// =============================================================================

/// A completed POS sale as listed in transaction histories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transaction {
    pub id: i64,
    pub receipt_number: String,
    pub staff_id: i64,
    #[serde(default)]
    pub staff_name: Option<String>,
    /// cash | card | e_wallet
    pub payment_method: String,
    /// completed | voided | refunded
    pub status: String,
    #[serde(default)]
    pub item_count: i64,
    /// Discount applied server-side (senior citizen, PWD, promo).
    #[serde(default)]
    pub discount_cents: i64,
    pub total_cents: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

// =============================================================================
// Analytics
// =============================================================================

/// One row of a manager report. Which columns are filled depends on the
/// report kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportRow {
    pub product_name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub batch_number: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub value_cents: i64,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A restock suggestion from the reorder planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReorderSuggestion {
    pub product_id: i64,
    pub product_name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub supplier_name: Option<String>,
    pub current_stock: i64,
    pub reorder_level: i64,
    pub suggested_quantity: i64,
}

/// A stock batch in the sustainability/expiry table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExpiryItem {
    pub product_id: i64,
    pub product_name: String,
    #[serde(default)]
    pub batch_number: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub quantity: i64,
    #[serde(default)]
    pub expiry_date: Option<String>,
    /// Negative once expired.
    #[serde(default)]
    pub days_to_expiry: i64,
    /// expired | near_expiry | safe
    pub status: String,
}

// =============================================================================
// Payload Decoding
// =============================================================================

/// List endpoints answer with a bare array or a `data` / `results` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Bare(Vec<T>),
    Data { data: Vec<T> },
    Results { results: Vec<T> },
}

/// Decodes a list endpoint response body into records.
///
/// ## Example
/// ```rust
/// use rxpos_core::types::{decode_records, Announcement};
///
/// let body = r#"{"data": [{"id": 1, "title": "Inventory count Friday", "pinned": true}]}"#;
/// let rows: Vec<Announcement> = decode_records(body).unwrap();
/// assert!(rows[0].pinned);
/// ```
pub fn decode_records<T: DeserializeOwned>(body: &str) -> CoreResult<Vec<T>> {
    let payload: ListPayload<T> = serde_json::from_str(body)?;
    Ok(match payload {
        ListPayload::Bare(rows) => rows,
        ListPayload::Data { data } => data,
        ListPayload::Results { results } => results,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
