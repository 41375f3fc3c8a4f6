//! # docket-core: Pure Business Logic for Docket
//!
//! This crate is the **heart** of Docket. It contains the pricing engine,
//! document numbering and validation rules as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Docket Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation Layer (external)                  │   │
//! │  │     Forms ──► Document lists ──► Detail views ──► Export       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 docket-store (Lifecycle + Repository)           │   │
//! │  │     validate ──► derive ──► persist snapshot                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ docket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │ numbering │  │ validation│  │   │
//! │  │   │ documents │  │ line/doc  │  │ INV/EST/DN│  │   rules   │  │   │
//! │  │   │  drafts   │  │  totals   │  │  counters │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Product, documents, drafts)
//! - [`pricing`] - Line-item and document totals computation
//! - [`numbering`] - Per-kind sequential document numbers
//! - [`validation`] - Lifecycle preconditions
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output; no clock, no files
//! 2. **Derived Fields Have One Source**: every total in the system is
//!    produced by [`pricing`], nowhere else
//! 3. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use docket_core::pricing::line_total;
//! use docket_core::numbering::{DocumentCounters, DocumentKind};
//!
//! // 40 hours × $125.00 at 10% tax, no discount
//! let total = line_total(40.0, 125.0, 10.0, 0.0);
//! assert!((total - 5500.0).abs() < docket_core::EPSILON);
//!
//! let mut counters = DocumentCounters::new();
//! assert_eq!(counters.next_number(DocumentKind::Invoice), "INV-001");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod numbering;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use docket_core::Invoice` instead of
// `use docket_core::types::Invoice`

pub use error::{ValidationError, ValidationResult};
pub use numbering::{DocumentCounters, DocumentKind};
pub use pricing::{document_totals, line_total, DocumentTotals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tolerance for comparing derived monetary figures.
///
/// Totals are f64 business figures; the aggregate round-trip property
/// (document grand total == sum of line totals) holds within this bound.
pub const EPSILON: f64 = 1e-9;
