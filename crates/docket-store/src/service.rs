//! # Document Lifecycle Service
//!
//! The single front door for all writes: validation, then repository,
//! then write-through persistence.
//!
//! ## Write Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Lifecycle Pipeline                                 │
//! │                                                                         │
//! │  caller draft                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate (docket-core rules) ──✗──► Err(StoreError::Validation)        │
//! │       │                              nothing written, nothing saved     │
//! │       ▼                                                                 │
//! │  Repository write (ids, numbers, totals, timestamps)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SnapshotStore::save  (skipped when the write was a no-op)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(created / Some(updated) / ())                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Missing-id updates return `Ok(None)` and missing-id deletes return
//! `Ok(())`; neither is an error and neither triggers a save.

use docket_core::validation::{validate_customer_id, validate_delivery_items, validate_line_items};
use docket_core::{
    Customer, CustomerDraft, CustomerPatch, DeliveryNote, DeliveryNotePatch, DocumentKind,
    DocumentPatch, Estimate, EstimateStatus, Invoice, InvoiceStatus, NewDeliveryNote, NewDocument,
    Product, ProductDraft, ProductPatch,
};
use tracing::debug;

use crate::error::StoreResult;
use crate::repository::Repository;
use crate::snapshot::SnapshotStore;

/// Owns the repository and its persistence collaborator.
pub struct DocumentService {
    repo: Repository,
    store: Box<dyn SnapshotStore>,
}

impl DocumentService {
    /// Opens the service against a snapshot store, restoring whatever it
    /// holds. A missing snapshot means an empty store (counters at 1).
    pub fn open(store: Box<dyn SnapshotStore>) -> StoreResult<Self> {
        let repo = match store.load()? {
            Some(snapshot) => Repository::from_snapshot(snapshot),
            None => Repository::new(),
        };
        debug!(
            invoices = repo.invoices().len(),
            estimates = repo.estimates().len(),
            delivery_notes = repo.delivery_notes().len(),
            "Opened document service"
        );
        Ok(DocumentService { repo, store })
    }

    fn persist(&self) -> StoreResult<()> {
        self.store.save(&self.repo.to_snapshot())
    }

    /// The number the next document of `kind` will receive, for display
    /// in creation forms. Nothing is reserved by calling this.
    pub fn preview_number(&self, kind: DocumentKind) -> String {
        format!("{}-{:03}", kind.prefix(), self.repo.counters().peek(kind))
    }

    // =========================================================================
    // Invoices
    // =========================================================================

    pub fn invoices(&self) -> &[Invoice] {
        self.repo.invoices()
    }

    pub fn invoice(&self, id: &str) -> Option<&Invoice> {
        self.repo.invoice(id)
    }

    /// Validates and creates an invoice, then persists.
    pub fn create_invoice(&mut self, new: NewDocument<InvoiceStatus>) -> StoreResult<Invoice> {
        validate_customer_id(&new.customer_id)?;
        validate_line_items(&new.line_items)?;

        let invoice = self.repo.insert_invoice(new);
        self.persist()?;
        Ok(invoice)
    }

    /// Validates and applies a partial update, then persists.
    ///
    /// `Ok(None)` means the id matched nothing; state and snapshot are
    /// untouched.
    pub fn update_invoice(
        &mut self,
        id: &str,
        patch: DocumentPatch<InvoiceStatus>,
    ) -> StoreResult<Option<Invoice>> {
        validate_document_patch(&patch)?;

        match self.repo.update_invoice(id, patch) {
            Some(invoice) => {
                self.persist()?;
                Ok(Some(invoice))
            }
            None => Ok(None),
        }
    }

    /// Deletes an invoice. Missing ids succeed without saving.
    pub fn delete_invoice(&mut self, id: &str) -> StoreResult<()> {
        if self.repo.remove_invoice(id) {
            self.persist()?;
        }
        Ok(())
    }

    // =========================================================================
    // Estimates
    // =========================================================================

    pub fn estimates(&self) -> &[Estimate] {
        self.repo.estimates()
    }

    pub fn estimate(&self, id: &str) -> Option<&Estimate> {
        self.repo.estimate(id)
    }

    pub fn create_estimate(&mut self, new: NewDocument<EstimateStatus>) -> StoreResult<Estimate> {
        validate_customer_id(&new.customer_id)?;
        validate_line_items(&new.line_items)?;

        let estimate = self.repo.insert_estimate(new);
        self.persist()?;
        Ok(estimate)
    }

    pub fn update_estimate(
        &mut self,
        id: &str,
        patch: DocumentPatch<EstimateStatus>,
    ) -> StoreResult<Option<Estimate>> {
        validate_document_patch(&patch)?;

        match self.repo.update_estimate(id, patch) {
            Some(estimate) => {
                self.persist()?;
                Ok(Some(estimate))
            }
            None => Ok(None),
        }
    }

    pub fn delete_estimate(&mut self, id: &str) -> StoreResult<()> {
        if self.repo.remove_estimate(id) {
            self.persist()?;
        }
        Ok(())
    }

    // =========================================================================
    // Delivery Notes
    // =========================================================================

    pub fn delivery_notes(&self) -> &[DeliveryNote] {
        self.repo.delivery_notes()
    }

    pub fn delivery_note(&self, id: &str) -> Option<&DeliveryNote> {
        self.repo.delivery_note(id)
    }

    pub fn create_delivery_note(&mut self, new: NewDeliveryNote) -> StoreResult<DeliveryNote> {
        validate_customer_id(&new.customer_id)?;
        validate_delivery_items(&new.items)?;

        let note = self.repo.insert_delivery_note(new);
        self.persist()?;
        Ok(note)
    }

    pub fn update_delivery_note(
        &mut self,
        id: &str,
        patch: DeliveryNotePatch,
    ) -> StoreResult<Option<DeliveryNote>> {
        if let Some(customer_id) = &patch.customer_id {
            validate_customer_id(customer_id)?;
        }
        if let Some(items) = &patch.items {
            validate_delivery_items(items)?;
        }

        match self.repo.update_delivery_note(id, patch) {
            Some(note) => {
                self.persist()?;
                Ok(Some(note))
            }
            None => Ok(None),
        }
    }

    pub fn delete_delivery_note(&mut self, id: &str) -> StoreResult<()> {
        if self.repo.remove_delivery_note(id) {
            self.persist()?;
        }
        Ok(())
    }

    // =========================================================================
    // Customers
    // =========================================================================

    pub fn customers(&self) -> &[Customer] {
        self.repo.customers()
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.repo.customer(id)
    }

    pub fn create_customer(&mut self, draft: CustomerDraft) -> StoreResult<Customer> {
        let customer = self.repo.insert_customer(draft);
        self.persist()?;
        Ok(customer)
    }

    pub fn update_customer(
        &mut self,
        id: &str,
        patch: CustomerPatch,
    ) -> StoreResult<Option<Customer>> {
        match self.repo.update_customer(id, patch) {
            Some(customer) => {
                self.persist()?;
                Ok(Some(customer))
            }
            None => Ok(None),
        }
    }

    /// Deletes a customer. Documents referencing it keep their dangling
    /// `customer_id`.
    pub fn delete_customer(&mut self, id: &str) -> StoreResult<()> {
        if self.repo.remove_customer(id) {
            self.persist()?;
        }
        Ok(())
    }

    // =========================================================================
    // Products
    // =========================================================================

    pub fn products(&self) -> &[Product] {
        self.repo.products()
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.repo.product(id)
    }

    pub fn create_product(&mut self, draft: ProductDraft) -> StoreResult<Product> {
        let product = self.repo.insert_product(draft);
        self.persist()?;
        Ok(product)
    }

    pub fn update_product(
        &mut self,
        id: &str,
        patch: ProductPatch,
    ) -> StoreResult<Option<Product>> {
        match self.repo.update_product(id, patch) {
            Some(product) => {
                self.persist()?;
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }

    pub fn delete_product(&mut self, id: &str) -> StoreResult<()> {
        if self.repo.remove_product(id) {
            self.persist()?;
        }
        Ok(())
    }
}

/// Patch-level validation: only the fields actually supplied are checked.
fn validate_document_patch<S>(patch: &DocumentPatch<S>) -> StoreResult<()> {
    if let Some(customer_id) = &patch.customer_id {
        validate_customer_id(customer_id)?;
    }
    if let Some(items) = &patch.line_items {
        validate_line_items(items)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::snapshot::MemorySnapshotStore;
    use chrono::NaiveDate;
    use docket_core::LineItemDraft;

    fn service_with_memory() -> (DocumentService, MemorySnapshotStore) {
        let store = MemorySnapshotStore::new();
        let service = DocumentService::open(Box::new(store.clone())).unwrap();
        (service, store)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_invoice(customer_id: &str, items: Vec<LineItemDraft>) -> NewDocument<InvoiceStatus> {
        NewDocument {
            customer_id: customer_id.to_string(),
            issue_date: date(2024, 12, 1),
            due_date: date(2024, 12, 31),
            line_items: items,
            status: InvoiceStatus::Draft,
        }
    }

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
    fn test_create_persists_snapshot() {
        let (mut service, store) = service_with_memory();
        assert!(store.contents().is_none());

        service
            .create_invoice(new_invoice("c1", vec![draft("Hosting", 1.0, 25.0)]))
            .unwrap();

        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.invoices.len(), 1);
        assert_eq!(saved.next_invoice_number, 2);
    }

    #[test]
    fn test_rejected_create_writes_nothing() {
        let (mut service, store) = service_with_memory();

        let err = service
            .create_invoice(new_invoice("", vec![draft("Hosting", 1.0, 25.0)]))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(service.invoices().is_empty());
        assert!(store.contents().is_none());

        // The failed attempt must not burn a number.
        let invoice = service
            .create_invoice(new_invoice("c1", vec![draft("Hosting", 1.0, 25.0)]))
            .unwrap();
        assert_eq!(invoice.number, "INV-001");
    }

    #[test]
    fn test_rejected_patch_leaves_document_untouched() {
        let (mut service, _store) = service_with_memory();
        let invoice = service
            .create_invoice(new_invoice("c1", vec![draft("Hosting", 1.0, 25.0)]))
            .unwrap();

        let bad = DocumentPatch {
            line_items: Some(vec![draft("", 1.0, 25.0)]),
            ..DocumentPatch::default()
        };
        assert!(service.update_invoice(&invoice.id, bad).is_err());

        let stored = service.invoice(&invoice.id).unwrap();
        assert_eq!(stored.line_items[0].product_name, "Hosting");
        assert_eq!(stored.updated_at, invoice.updated_at);
    }

    #[test]
    fn test_missing_id_update_returns_none_and_skips_save() {
        let (mut service, store) = service_with_memory();

        let result = service
            .update_invoice("ghost", DocumentPatch::default())
            .unwrap();
        assert!(result.is_none());
        assert!(store.contents().is_none());
    }

    #[test]
    fn test_missing_id_delete_is_ok() {
        let (mut service, store) = service_with_memory();
        service.delete_invoice("ghost").unwrap();
        assert!(store.contents().is_none());
    }

    #[test]
    fn test_reopen_restores_state_and_numbering() {
        let store = MemorySnapshotStore::new();
        {
            let mut service = DocumentService::open(Box::new(store.clone())).unwrap();
            service
                .create_invoice(new_invoice("c1", vec![draft("Hosting", 1.0, 25.0)]))
                .unwrap();
            service
                .create_invoice(new_invoice("c1", vec![draft("Support", 2.0, 40.0)]))
                .unwrap();
        }

        let mut reopened = DocumentService::open(Box::new(store)).unwrap();
        assert_eq!(reopened.invoices().len(), 2);
        assert_eq!(reopened.preview_number(DocumentKind::Invoice), "INV-003");

        let third = reopened
            .create_invoice(new_invoice("c1", vec![draft("Hosting", 1.0, 25.0)]))
            .unwrap();
        assert_eq!(third.number, "INV-003");
    }

    #[test]
    fn test_preview_number_reserves_nothing() {
        let (mut service, _store) = service_with_memory();
        assert_eq!(service.preview_number(DocumentKind::Estimate), "EST-001");
        assert_eq!(service.preview_number(DocumentKind::Estimate), "EST-001");

        let estimate = service
            .create_estimate(NewDocument {
                customer_id: "c1".to_string(),
                issue_date: date(2024, 12, 1),
                due_date: date(2025, 1, 1),
                line_items: vec![],
                status: EstimateStatus::Draft,
            })
            .unwrap();
        assert_eq!(estimate.number, "EST-001");
    }

    #[test]
    fn test_delivery_note_zero_quantity_rejected() {
        let (mut service, _store) = service_with_memory();
        let err = service
            .create_delivery_note(NewDeliveryNote {
                customer_id: "c1".to_string(),
                delivery_date: date(2024, 12, 20),
                items: vec![docket_core::DeliveryItemDraft {
                    product_id: None,
                    product_name: "Project Files".to_string(),
                    quantity: 0,
                }],
                status: docket_core::DeliveryStatus::Pending,
                notes: None,
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }
}
