//! # Pricing Engine
//!
//! Pure computation of line totals and document totals.
//!
//! ## The One Rule That Matters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DISCOUNT BEFORE TAX                                                    │
//! │                                                                         │
//! │  raw          = quantity × price                                        │
//! │  discount     = raw × (discount% / 100)                                 │
//! │  after        = raw - discount                                          │
//! │  tax          = after × (tax% / 100)     ← tax on the DISCOUNTED base   │
//! │  line total   = after + tax                                             │
//! │                                                                         │
//! │  Reversing the order (tax on the gross, then discount) changes every    │
//! │  downstream total. Do not "fix" this.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Edge-Case Policy
//! Percentages outside 0-100 are applied as given, not clamped. Callers
//! (the lifecycle layer) reject negative prices and non-positive
//! quantities before these functions run; the math itself is total over
//! all numeric inputs and has no error conditions.
//!
//! ## Why f64?
//! Document amounts here are display-precision business figures, not
//! ledger entries; the aggregate invariant is checked within float
//! tolerance (see [`crate::EPSILON`]).

use crate::types::LineItem;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregate totals of a priced document.
///
/// All four figures are derived from the line items; no code path may set
/// them independently.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTotals {
    /// Gross sum of quantity × price, pre-discount.
    pub subtotal: f64,
    /// Sum of per-line discount amounts.
    pub total_discount: f64,
    /// Sum of per-line tax, each computed on its discounted base.
    pub total_tax: f64,
    /// `subtotal - total_discount + total_tax`.
    pub grand_total: f64,
}

/// Computes a single line item's total.
///
/// Discount is applied first, then tax on the discounted base:
///
/// ```rust
/// use docket_core::pricing::line_total;
///
/// // 20 × $95.00, 5% discount, 10% tax:
/// // 1900 - 95 = 1805, + 180.50 tax = 1985.50
/// assert!((line_total(20.0, 95.0, 10.0, 5.0) - 1985.5).abs() < 1e-9);
/// ```
pub fn line_total(quantity: f64, price: f64, tax_percent: f64, discount_percent: f64) -> f64 {
    let raw_subtotal = quantity * price;
    let discount = raw_subtotal * (discount_percent / 100.0);
    let after_discount = raw_subtotal - discount;
    let tax = after_discount * (tax_percent / 100.0);
    after_discount + tax
}

/// Computes the aggregate totals over a document's line items.
///
/// Tax is summed per line on each line's discounted base, not derived
/// from the aggregate discount; this keeps `grand_total` equal to the sum
/// of the per-item [`line_total`]s. An empty slice yields all zeros.
pub fn document_totals(items: &[LineItem]) -> DocumentTotals {
    let subtotal: f64 = items.iter().map(|i| i.quantity * i.price).sum();

    let total_discount: f64 = items
        .iter()
        .map(|i| i.quantity * i.price * (i.discount_percent / 100.0))
        .sum();

    let total_tax: f64 = items
        .iter()
        .map(|i| {
            let item_subtotal = i.quantity * i.price;
            let item_discount = item_subtotal * (i.discount_percent / 100.0);
            (item_subtotal - item_discount) * (i.tax_percent / 100.0)
        })
        .sum();

    DocumentTotals {
        subtotal,
        total_discount,
        total_tax,
        grand_total: subtotal - total_discount + total_tax,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
