//! # Snapshot Persistence
//!
//! The persisted shape of the whole store and the collaborator that
//! loads/saves it.
//!
//! ## Write-Through Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Snapshot Lifecycle                                   │
//! │                                                                         │
//! │  Startup:   SnapshotStore::load() ──► Some(snapshot) → restore state   │
//! │                                   └─► None           → empty store     │
//! │                                                                         │
//! │  Mutation:  create/update/delete ──► SnapshotStore::save(&snapshot)    │
//! │             (after EVERY accepted write; write-through, not behind)    │
//! │                                                                         │
//! │  The snapshot is one atomic unit: collections + counters together.     │
//! │  Partial writes are not defended against (durability is the            │
//! │  collaborator's problem, and out of scope).                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;

use docket_core::{Customer, DeliveryNote, Estimate, Invoice, Product};

use crate::error::StoreResult;

/// Default file name for the on-disk snapshot.
pub const DEFAULT_SNAPSHOT_FILE: &str = "docket-store.json";

/// The complete persisted state: every collection plus the numbering
/// counters, serialized as a single camelCase JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub invoices: Vec<Invoice>,
    pub estimates: Vec<Estimate>,
    pub delivery_notes: Vec<DeliveryNote>,
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub next_invoice_number: u32,
    pub next_estimate_number: u32,
    pub next_delivery_number: u32,
}

impl Snapshot {
    /// An empty store: no documents, every counter at 1.
    pub fn empty() -> Self {
        Snapshot {
            next_invoice_number: 1,
            next_estimate_number: 1,
            next_delivery_number: 1,
            ..Snapshot::default()
        }
    }
}

// =============================================================================
// Snapshot Store Collaborator
// =============================================================================

/// Persistence collaborator: loads the snapshot at startup and saves it
/// after every mutation.
///
/// Implementations must round-trip [`Snapshot`] exactly; the format on
/// the other side is their business.
pub trait SnapshotStore: Send {
    /// Reads the persisted snapshot, or `None` if nothing has been saved
    /// under this store's key yet.
    fn load(&self) -> StoreResult<Option<Snapshot>>;

    /// Replaces the persisted snapshot.
    fn save(&self, snapshot: &Snapshot) -> StoreResult<()>;
}

// =============================================================================
// JSON File Backend
// =============================================================================

/// Snapshot store backed by a single JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Creates a store using [`DEFAULT_SNAPSHOT_FILE`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        JsonFileStore {
            path: dir.as_ref().join(DEFAULT_SNAPSHOT_FILE),
        }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<Snapshot>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No snapshot file; starting empty");
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path)?;
        let snapshot: Snapshot = serde_json::from_str(&text)?;

        debug!(
            path = %self.path.display(),
            invoices = snapshot.invoices.len(),
            estimates = snapshot.estimates.len(),
            delivery_notes = snapshot.delivery_notes.len(),
            "Loaded snapshot"
        );
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let text = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, text)?;

        debug!(path = %self.path.display(), "Saved snapshot");
        Ok(())
    }
}

// =============================================================================
// In-Memory Backend (tests, demos)
// =============================================================================

/// Snapshot store that keeps the serialized document in memory.
///
/// Cloning shares the underlying slot, so a test can hold one handle,
/// hand a clone to the service, and inspect what was saved.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemorySnapshotStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        MemorySnapshotStore::default()
    }

    /// The raw JSON last saved, if any.
    pub fn contents(&self) -> Option<String> {
        self.slot.lock().expect("snapshot slot poisoned").clone()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> StoreResult<Option<Snapshot>> {
        let slot = self.slot.lock().expect("snapshot slot poisoned");
        match slot.as_deref() {
            Some(text) => Ok(Some(serde_json::from_str(text)?)),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let text = serde_json::to_string(snapshot)?;
        *self.slot.lock().expect("snapshot slot poisoned") = Some(text);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
