//! # Document Numbering
//!
//! Human-readable sequential document numbers, one counter per kind.
//!
//! ## Number Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  {PREFIX}-{counter, zero-padded to 3}                                   │
//! │                                                                         │
//! │  Invoice       INV-001, INV-002, ... INV-999, INV-1000                  │
//! │  Estimate      EST-001, ...                                             │
//! │  DeliveryNote  DN-001,  ...                                             │
//! │                                                                         │
//! │  Past 999 the number simply grows; there is no overflow error.          │
//! │  Numbers are never reused, even after the document is deleted.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The counters are plain data so the snapshot can round-trip them; the
//! single-writer model (one synchronous mutator at a time) means no
//! locking is needed around [`DocumentCounters::next_number`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The three document kinds managed by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Invoice,
    Estimate,
    DeliveryNote,
}

impl DocumentKind {
    /// Number prefix for this kind.
    pub const fn prefix(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "INV",
            DocumentKind::Estimate => "EST",
            DocumentKind::DeliveryNote => "DN",
        }
    }
}

/// One monotonically increasing counter per document kind.
///
/// Each counter holds the number the *next* document of that kind will
/// receive. Fresh state starts every counter at 1; restored state carries
/// whatever the snapshot recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCounters {
    pub next_invoice: u32,
    pub next_estimate: u32,
    pub next_delivery: u32,
}

impl DocumentCounters {
    /// Counters for an empty store: every kind starts at 1.
    pub const fn new() -> Self {
        DocumentCounters {
            next_invoice: 1,
            next_estimate: 1,
            next_delivery: 1,
        }
    }

    /// Formats the next number for `kind` and advances its counter.
    ///
    /// Side-effecting by design: two calls never return the same value.
    ///
    /// ```rust
    /// use docket_core::numbering::{DocumentCounters, DocumentKind};
    ///
    /// let mut counters = DocumentCounters::new();
    /// assert_eq!(counters.next_number(DocumentKind::Invoice), "INV-001");
    /// assert_eq!(counters.next_number(DocumentKind::Invoice), "INV-002");
    /// assert_eq!(counters.next_number(DocumentKind::Estimate), "EST-001");
    /// ```
    pub fn next_number(&mut self, kind: DocumentKind) -> String {
        let counter = match kind {
            DocumentKind::Invoice => &mut self.next_invoice,
            DocumentKind::Estimate => &mut self.next_estimate,
            DocumentKind::DeliveryNote => &mut self.next_delivery,
        };
        let number = format!("{}-{:03}", kind.prefix(), *counter);
        *counter += 1;
        number
    }

    /// The number the next document of `kind` would receive, without
    /// advancing anything.
    pub fn peek(&self, kind: DocumentKind) -> u32 {
        match kind {
            DocumentKind::Invoice => self.next_invoice,
            DocumentKind::Estimate => self.next_estimate,
            DocumentKind::DeliveryNote => self.next_delivery,
        }
    }
}

impl Default for DocumentCounters {
    fn default() -> Self {
        DocumentCounters::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(DocumentKind::Invoice.prefix(), "INV");
        assert_eq!(DocumentKind::Estimate.prefix(), "EST");
        assert_eq!(DocumentKind::DeliveryNote.prefix(), "DN");
    }

    #[test]
    fn test_zero_padding() {
        let mut counters = DocumentCounters::new();
        assert_eq!(counters.next_number(DocumentKind::DeliveryNote), "DN-001");

        counters.next_delivery = 42;
        assert_eq!(counters.next_number(DocumentKind::DeliveryNote), "DN-042");
    }

    #[test]
    fn test_grows_past_three_digits() {
        let mut counters = DocumentCounters::new();
        counters.next_invoice = 999;

        assert_eq!(counters.next_number(DocumentKind::Invoice), "INV-999");
        assert_eq!(counters.next_number(DocumentKind::Invoice), "INV-1000");
        assert_eq!(counters.next_number(DocumentKind::Invoice), "INV-1001");
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut counters = DocumentCounters::new();

        counters.next_number(DocumentKind::Invoice);
        counters.next_number(DocumentKind::Invoice);
        counters.next_number(DocumentKind::Estimate);

        assert_eq!(counters.peek(DocumentKind::Invoice), 3);
        assert_eq!(counters.peek(DocumentKind::Estimate), 2);
        assert_eq!(counters.peek(DocumentKind::DeliveryNote), 1);
    }

    #[test]
    fn test_strictly_increasing_never_repeats() {
        let mut counters = DocumentCounters::new();
        let mut seen = Vec::new();

        for _ in 0..50 {
            // Interleave kinds; invoice numbers must stay strictly increasing
            // regardless.
            counters.next_number(DocumentKind::Estimate);
            seen.push(counters.next_number(DocumentKind::Invoice));
            counters.next_number(DocumentKind::DeliveryNote);
        }

        for pair in seen.windows(2) {
            let a: u32 = pair[0].trim_start_matches("INV-").parse().unwrap();
            let b: u32 = pair[1].trim_start_matches("INV-").parse().unwrap();
            assert!(b > a, "{} should come after {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_seeded_counters_resume() {
        // Restored from a snapshot that already holds five invoices.
        let mut counters = DocumentCounters {
            next_invoice: 6,
            next_estimate: 4,
            next_delivery: 4,
        };

        assert_eq!(counters.next_number(DocumentKind::Invoice), "INV-006");
        assert_eq!(counters.next_number(DocumentKind::Estimate), "EST-004");
        assert_eq!(counters.next_number(DocumentKind::DeliveryNote), "DN-004");
    }
}
