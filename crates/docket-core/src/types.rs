//! # Domain Types
//!
//! Core domain types used throughout Docket.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │    Customer     │   │  PricedDocument<S>   │   │  DeliveryNote   │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  id (UUID)      │   │  id (UUID)           │   │  id (UUID)      │  │
//! │  │  name, email    │   │  number (INV-/EST-)  │   │  number (DN-)   │  │
//! │  │  phone, address │   │  line_items, totals  │   │  items (no $)   │  │
//! │  └─────────────────┘   │  status: S           │   │  status         │  │
//! │                        └──────────────────────┘   └─────────────────┘  │
//! │                                                                         │
//! │  Invoice  = PricedDocument<InvoiceStatus>   (draft|unpaid|paid)        │
//! │  Estimate = PricedDocument<EstimateStatus>  (draft|sent|accepted|...)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every document has:
//! - `id`: UUID v4 - immutable, used for lookups and references
//! - `number`: human-readable sequential identifier (`INV-006`), assigned
//!   once by the numbering generator and never reused
//!
//! ## Derived Fields
//! `LineItem::line_total` and the four document totals are never accepted
//! from callers. Inputs arrive as drafts without those fields; the
//! repository materializes them through [`crate::pricing`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Reference Entities
// =============================================================================

/// A customer that documents are issued against.
///
/// Reference entity: created, edited and deleted independently of the
/// documents that point at it. Deleting a customer leaves dangling
/// `customer_id` references behind; readers resolve them as "customer not
/// found" rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Input shape for creating a customer (id is assigned by the repository).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Partial update for a customer. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// A product used to pre-fill line items at selection time.
///
/// Line items copy `price` and `default_tax` when the product is picked;
/// editing the product afterwards never rewrites existing line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Unit price, >= 0.
    pub price: f64,
    /// Default tax percentage copied into new line items (0-100).
    pub default_tax: f64,
}

/// Input shape for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub default_tax: f64,
}

/// Partial update for a product. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub default_tax: Option<f64>,
}

// =============================================================================
// Line Items
// =============================================================================

/// A priced row within an invoice or estimate.
///
/// Uses the snapshot pattern: `product_name`, `price` and `tax_percent`
/// are frozen copies taken when the product was selected (or typed in by
/// hand), so later product edits never change historical documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unique within its document (not globally).
    pub id: String,
    /// Back-reference to the product this row was filled from, if any.
    pub product_id: Option<String>,
    /// Always present: copied from a product or typed manually.
    pub product_name: String,
    /// Must be > 0. Fractional quantities (e.g. 1.5 hours) are legal.
    pub quantity: f64,
    /// Unit price, >= 0.
    pub price: f64,
    /// Tax percentage (0-100).
    pub tax_percent: f64,
    /// Discount percentage (0-100).
    pub discount_percent: f64,
    /// Derived: recomputed by the pricing engine on every write that
    /// touches this item. Never accepted from callers.
    pub line_total: f64,
}

/// Caller-supplied shape of a priced line item.
///
/// Deliberately has no `id` or `line_total`: the repository assigns the
/// id and the pricing engine derives the total.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDraft {
    pub product_id: Option<String>,
    pub product_name: String,
    pub quantity: f64,
    pub price: f64,
    pub tax_percent: f64,
    pub discount_percent: f64,
}

/// An unpriced row within a delivery note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryItem {
    pub id: String,
    pub product_id: Option<String>,
    pub product_name: String,
    /// Units shipped, must be > 0.
    pub quantity: u32,
}

/// Caller-supplied shape of a delivery note row.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryItemDraft {
    pub product_id: Option<String>,
    pub product_name: String,
    pub quantity: u32,
}

// =============================================================================
// Document Statuses
// =============================================================================

/// Invoice lifecycle status.
///
/// Statuses are always caller-chosen; there is no transition state
/// machine (any status may follow any other).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Unpaid,
    Paid,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Draft
    }
}

/// Estimate lifecycle status. Caller-chosen, no transition enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EstimateStatus {
    Draft,
    Sent,
    Accepted,
    Rejected,
    Expired,
}

impl Default for EstimateStatus {
    fn default() -> Self {
        EstimateStatus::Draft
    }
}

/// Delivery note status. Caller-chosen, no transition enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    InTransit,
    Delivered,
}

impl Default for DeliveryStatus {
    fn default() -> Self {
        DeliveryStatus::Pending
    }
}

// =============================================================================
// Priced Documents (Invoice / Estimate)
// =============================================================================

/// A priced document: an invoice or an estimate.
///
/// The two kinds share >90% of their structure; the only differences are
/// the status enum and the reading of `due_date` (payment deadline for
/// invoices, valid-until date for estimates), so both are instances of
/// this one generic struct and every pricing/lifecycle rule is written
/// exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricedDocument<S> {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Human-readable sequential number (`INV-006` / `EST-004`).
    pub number: String,
    /// Reference to a [`Customer`]; may dangle after customer deletion.
    pub customer_id: String,
    #[ts(as = "String")]
    pub issue_date: NaiveDate,
    /// Payment deadline for invoices; valid-until date for estimates.
    #[ts(as = "String")]
    pub due_date: NaiveDate,
    pub line_items: Vec<LineItem>,
    /// Derived: gross sum of quantity × price, pre-discount.
    pub subtotal: f64,
    /// Derived: sum of per-line discount amounts.
    pub total_discount: f64,
    /// Derived: sum of per-line tax on the discounted base.
    pub total_tax: f64,
    /// Derived: `subtotal - total_discount + total_tax`.
    pub grand_total: f64,
    pub status: S,
    /// Set once at creation, immutable afterwards.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation; always >= `created_at`.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// An invoice (`INV-NNN`, draft|unpaid|paid).
pub type Invoice = PricedDocument<InvoiceStatus>;

/// An estimate (`EST-NNN`, draft|sent|accepted|rejected|expired).
pub type Estimate = PricedDocument<EstimateStatus>;

/// Caller-supplied shape for creating a priced document.
///
/// Id, number, totals and timestamps are all assigned by the repository.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument<S> {
    pub customer_id: String,
    #[ts(as = "String")]
    pub issue_date: NaiveDate,
    #[ts(as = "String")]
    pub due_date: NaiveDate,
    pub line_items: Vec<LineItemDraft>,
    pub status: S,
}

/// Partial update for a priced document. `None` fields are left
/// untouched; supplying `line_items` triggers a totals recomputation,
/// omitting it leaves the stored totals exactly as they were.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentPatch<S> {
    pub customer_id: Option<String>,
    #[ts(as = "Option<String>")]
    pub issue_date: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub due_date: Option<NaiveDate>,
    pub line_items: Option<Vec<LineItemDraft>>,
    pub status: Option<S>,
}

impl<S> Default for DocumentPatch<S> {
    fn default() -> Self {
        DocumentPatch {
            customer_id: None,
            issue_date: None,
            due_date: None,
            line_items: None,
            status: None,
        }
    }
}

// =============================================================================
// Delivery Notes
// =============================================================================

/// A delivery note (`DN-NNN`).
///
/// Carries no pricing and no persisted totals; item and quantity counts
/// are computed on demand via [`DeliveryNote::item_count`] and
/// [`DeliveryNote::total_quantity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryNote {
    pub id: String,
    pub number: String,
    pub customer_id: String,
    #[ts(as = "String")]
    pub delivery_date: NaiveDate,
    pub items: Vec<DeliveryItem>,
    pub status: DeliveryStatus,
    pub notes: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl DeliveryNote {
    /// Number of rows on the note.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all rows.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

/// Caller-supplied shape for creating a delivery note.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewDeliveryNote {
    pub customer_id: String,
    #[ts(as = "String")]
    pub delivery_date: NaiveDate,
    pub items: Vec<DeliveryItemDraft>,
    pub status: DeliveryStatus,
    pub notes: Option<String>,
}

/// Partial update for a delivery note. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryNotePatch {
    pub customer_id: Option<String>,
    #[ts(as = "Option<String>")]
    pub delivery_date: Option<NaiveDate>,
    pub items: Option<Vec<DeliveryItemDraft>>,
    pub status: Option<DeliveryStatus>,
    pub notes: Option<String>,
}

// =============================================================================
// User Profile
// =============================================================================

/// The authenticated user's profile, as returned by the auth gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub address: String,
    pub phone: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
