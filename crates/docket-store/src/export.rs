//! # Export Assembly
//!
//! Builds self-contained export requests for the rendering collaborator.
//!
//! ## Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Export Boundary                                   │
//! │                                                                         │
//! │  DocumentService ──► ExportRequest ──► Exporter (external)             │
//! │                      • the document, frozen                            │
//! │                      • resolved customer (None when dangling)          │
//! │                      • target file name "{number}.pdf"                 │
//! │                                                                         │
//! │  THIS MODULE ASSEMBLES; IT NEVER RENDERS. Layout, pagination and       │
//! │  actual PDF bytes live behind the Exporter trait.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use docket_core::{Customer, DeliveryNote, Estimate, Invoice};

use crate::service::DocumentService;

/// How the rendered document leaves the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Hand the rendered document to the platform print dialog.
    Print,
    /// Write a PDF file named after the document number.
    Pdf,
}

/// Any of the three exportable document kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ExportDocument {
    Invoice(Invoice),
    Estimate(Estimate),
    DeliveryNote(DeliveryNote),
}

impl ExportDocument {
    /// The document's assigned number (`INV-006`, `EST-004`, `DN-004`).
    pub fn number(&self) -> &str {
        match self {
            ExportDocument::Invoice(doc) => &doc.number,
            ExportDocument::Estimate(doc) => &doc.number,
            ExportDocument::DeliveryNote(doc) => &doc.number,
        }
    }
}

/// Everything a renderer needs, with no way back into the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub document: ExportDocument,
    /// Resolved at assembly time; `None` when the customer was deleted
    /// after the document was written. Renderers show "customer not
    /// found" in that case.
    pub customer: Option<Customer>,
    pub format: ExportFormat,
}

impl ExportRequest {
    /// Target file name for PDF export: `{number}.pdf`.
    ///
    /// Print export ignores this.
    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.document.number())
    }
}

/// Export failure, reported by the rendering collaborator.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("renderer failed: {0}")]
    Renderer(String),
}

/// Rendering collaborator. Implementations live outside this crate
/// (platform print dialog, PDF writer); tests use recording stubs.
pub trait Exporter {
    fn export(&self, request: &ExportRequest) -> Result<(), ExportError>;
}

// =============================================================================
// Assembly from the Service
// =============================================================================

impl DocumentService {
    /// Assembles an export request for an invoice, or `None` when the
    /// id matches nothing.
    pub fn export_invoice(&self, id: &str, format: ExportFormat) -> Option<ExportRequest> {
        let invoice = self.invoice(id)?.clone();
        let customer = self.customer(&invoice.customer_id).cloned();
        Some(ExportRequest {
            document: ExportDocument::Invoice(invoice),
            customer,
            format,
        })
    }

    /// Assembles an export request for an estimate.
    pub fn export_estimate(&self, id: &str, format: ExportFormat) -> Option<ExportRequest> {
        let estimate = self.estimate(id)?.clone();
        let customer = self.customer(&estimate.customer_id).cloned();
        Some(ExportRequest {
            document: ExportDocument::Estimate(estimate),
            customer,
            format,
        })
    }

    /// Assembles an export request for a delivery note.
    pub fn export_delivery_note(&self, id: &str, format: ExportFormat) -> Option<ExportRequest> {
        let note = self.delivery_note(id)?.clone();
        let customer = self.customer(&note.customer_id).cloned();
        Some(ExportRequest {
            document: ExportDocument::DeliveryNote(note),
            customer,
            format,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
