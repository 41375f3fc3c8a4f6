//! # docket-store: State & Persistence Layer for Docket
//!
//! Owns every mutable collection, gates writes through validation, and
//! persists the whole state as one JSON snapshot after each mutation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        docket-store                                     │
//! │                                                                         │
//! │   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐               │
//! │   │   service    │──►│  repository  │──►│   snapshot   │               │
//! │   │ validate +   │   │ collections  │   │ JSON file /  │               │
//! │   │ write-through│   │ ids, numbers │   │ in-memory    │               │
//! │   └──────────────┘   └──────────────┘   └──────────────┘               │
//! │          │                                                              │
//! │   ┌──────┴───────┐   ┌──────────────┐   ┌──────────────┐               │
//! │   │    export    │   │     auth     │   │     seed     │               │
//! │   │ request      │   │ demo session │   │ demo dataset │               │
//! │   │ assembly     │   │ gate         │   │ + counters   │               │
//! │   └──────────────┘   └──────────────┘   └──────────────┘               │
//! │                                                                         │
//! │   All pricing, numbering and validation RULES live in docket-core;     │
//! │   this crate wires them to state and I/O.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use docket_core::{InvoiceStatus, LineItemDraft, NewDocument};
//! use docket_store::service::DocumentService;
//! use docket_store::snapshot::MemorySnapshotStore;
//!
//! # fn main() -> docket_store::error::StoreResult<()> {
//! let mut service = DocumentService::open(Box::new(MemorySnapshotStore::new()))?;
//!
//! let invoice = service.create_invoice(NewDocument {
//!     customer_id: "c1".to_string(),
//!     issue_date: "2024-12-01".parse().unwrap(),
//!     due_date: "2024-12-31".parse().unwrap(),
//!     line_items: vec![LineItemDraft {
//!         product_id: None,
//!         product_name: "Web Development".to_string(),
//!         quantity: 40.0,
//!         price: 125.0,
//!         tax_percent: 10.0,
//!         discount_percent: 0.0,
//!     }],
//!     status: InvoiceStatus::Unpaid,
//! })?;
//!
//! assert_eq!(invoice.number, "INV-001");
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod error;
pub mod export;
pub mod repository;
pub mod seed;
pub mod service;
pub mod snapshot;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use auth::AuthGate;
pub use error::{StoreError, StoreResult};
pub use export::{ExportDocument, ExportError, ExportFormat, ExportRequest, Exporter};
pub use repository::Repository;
pub use service::DocumentService;
pub use snapshot::{JsonFileStore, MemorySnapshotStore, Snapshot, SnapshotStore};
