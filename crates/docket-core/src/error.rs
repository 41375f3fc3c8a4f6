//! # Error Types
//!
//! Validation errors for docket-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the field name in every message
//! 3. Errors are enum variants, never String
//!
//! The pricing and numbering modules are total over their inputs and have
//! no error conditions; validation is the only fallible surface in this
//! crate. The store crate wraps [`ValidationError`] into its own error
//! type together with persistence failures.

use thiserror::Error;

/// Input validation errors.
///
/// These occur when caller-supplied input doesn't meet the lifecycle
/// preconditions. They are reported synchronously, never persisted, and
/// never retried automatically.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },
}

impl ValidationError {
    /// Creates a Required error for `field`.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
