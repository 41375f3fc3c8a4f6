//! # Store Error Types
//!
//! Error types for repository and persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (docket-core)   io::Error / serde_json::Error          │
//! │       │                               │                                 │
//! │       ▼                               ▼                                 │
//! │  StoreError::Validation          StoreError::Snapshot*                  │
//! │       │                               │                                 │
//! │       └───────────────┬───────────────┘                                 │
//! │                       ▼                                                 │
//! │  Presentation layer shows a user-facing message; nothing is fatal      │
//! │  and every failure is recoverable by user retry or correction.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note what is NOT here: missing ids on update/delete are a silent
//! no-op by contract, not an error.

use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A write was rejected before touching the repository.
    #[error("validation failed: {0}")]
    Validation(#[from] docket_core::ValidationError),

    /// The snapshot file could not be read or written.
    #[error("snapshot I/O failed: {0}")]
    SnapshotIo(#[from] std::io::Error),

    /// The snapshot document could not be encoded or decoded.
    #[error("snapshot is not valid JSON: {0}")]
    SnapshotFormat(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use docket_core::ValidationError;

    #[test]
    fn test_validation_error_wraps() {
        let err: StoreError = ValidationError::required("customerId").into();
        assert_eq!(err.to_string(), "validation failed: customerId is required");
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_io_error_wraps() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: StoreError = io.into();
        assert!(matches!(err, StoreError::SnapshotIo(_)));
    }
}
