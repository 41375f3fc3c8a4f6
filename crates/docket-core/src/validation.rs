//! # Validation Module
//!
//! Lifecycle preconditions for document writes.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Lifecycle service (Rust)                                     │
//! │  └── THIS MODULE: reject before anything is written                    │
//! │                                                                         │
//! │  A rejected write never reaches the repository and never persists.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is Deliberately NOT Validated
//! Tax and discount percentages are not range-checked; out-of-range
//! values are applied by the pricing engine as given. This is documented
//! policy, not an oversight. Statuses are caller-chosen with no
//! transition rules.

use crate::error::{ValidationError, ValidationResult};
use crate::types::{DeliveryItemDraft, LineItemDraft};

/// Validates a document's customer reference.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// The id is not checked against the customer collection: dangling
/// references are tolerated by readers, so a stale-but-nonempty id is
/// accepted here.
pub fn validate_customer_id(customer_id: &str) -> ValidationResult<()> {
    if customer_id.trim().is_empty() {
        return Err(ValidationError::required("customerId"));
    }

    Ok(())
}

/// Validates a single priced line item draft.
///
/// ## Rules
/// - `product_name` must not be empty
/// - `quantity` must be > 0
/// - `price` must be >= 0 (zero is allowed: free items)
pub fn validate_line_item(item: &LineItemDraft) -> ValidationResult<()> {
    if item.product_name.trim().is_empty() {
        return Err(ValidationError::required("productName"));
    }

    if !(item.quantity > 0.0) {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if item.price < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates every line item of a priced document.
pub fn validate_line_items(items: &[LineItemDraft]) -> ValidationResult<()> {
    for item in items {
        validate_line_item(item)?;
    }
    Ok(())
}

/// Validates a single delivery note row.
///
/// ## Rules
/// - `product_name` must not be empty
/// - `quantity` must be > 0 (there is no price to check)
pub fn validate_delivery_item(item: &DeliveryItemDraft) -> ValidationResult<()> {
    if item.product_name.trim().is_empty() {
        return Err(ValidationError::required("productName"));
    }

    if item.quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates every row of a delivery note.
pub fn validate_delivery_items(items: &[DeliveryItemDraft]) -> ValidationResult<()> {
    for item in items {
        validate_delivery_item(item)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, quantity: f64, price: f64) -> LineItemDraft {
        LineItemDraft {
            product_id: None,
            product_name: name.to_string(),
            quantity,
            price,
            tax_percent: 10.0,
            discount_percent: 0.0,
        }
    }

    #[test]
    fn test_validate_customer_id() {
        assert!(validate_customer_id("c-17").is_ok());
        assert!(validate_customer_id("").is_err());
        assert!(validate_customer_id("   ").is_err());
    }

    #[test]
    fn test_validate_line_item() {
        assert!(validate_line_item(&draft("Web Development", 40.0, 125.0)).is_ok());
        assert!(validate_line_item(&draft("Free Sample", 1.0, 0.0)).is_ok());

        assert!(validate_line_item(&draft("", 1.0, 10.0)).is_err());
        assert!(validate_line_item(&draft("  ", 1.0, 10.0)).is_err());
        assert!(validate_line_item(&draft("Service", 0.0, 10.0)).is_err());
        assert!(validate_line_item(&draft("Service", -2.0, 10.0)).is_err());
        assert!(validate_line_item(&draft("Service", 1.0, -0.01)).is_err());
    }

    #[test]
    fn test_nan_quantity_is_rejected() {
        assert!(validate_line_item(&draft("Service", f64::NAN, 10.0)).is_err());
    }

    #[test]
    fn test_out_of_range_percentages_pass() {
        // Documented policy: percentages are not range-checked here.
        let mut item = draft("Service", 1.0, 10.0);
        item.discount_percent = 150.0;
        item.tax_percent = -5.0;
        assert!(validate_line_item(&item).is_ok());
    }

    #[test]
    fn test_validate_line_items_reports_first_failure() {
        let items = vec![draft("Good", 1.0, 10.0), draft("", 1.0, 10.0)];
        let err = validate_line_items(&items).unwrap_err();
        assert_eq!(err.to_string(), "productName is required");
    }

    #[test]
    fn test_validate_delivery_item() {
        let ok = DeliveryItemDraft {
            product_id: None,
            product_name: "Consulting Report".to_string(),
            quantity: 3,
        };
        assert!(validate_delivery_item(&ok).is_ok());

        let unnamed = DeliveryItemDraft {
            product_name: String::new(),
            ..ok.clone()
        };
        assert!(validate_delivery_item(&unnamed).is_err());

        let zero = DeliveryItemDraft { quantity: 0, ..ok };
        assert!(validate_delivery_item(&zero).is_err());
    }
}
