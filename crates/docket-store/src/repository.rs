//! # Document Repository
//!
//! In-memory collections for every entity, with the mechanical side of
//! writes: id assignment, number assignment, derived-field
//! materialization and timestamp upkeep.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Repository Writes                                  │
//! │                                                                         │
//! │  insert:  draft ──► uuid ──► next number ──► price items ──► totals    │
//! │                 └─► created_at = updated_at = now ──► push             │
//! │                                                                         │
//! │  update:  id found?  ──► merge patch ──► reprice IF items changed      │
//! │                      │        └─► updated_at = now                      │
//! │                      └─ no ──► None (silent no-op, NOT an error)       │
//! │                                                                         │
//! │  remove:  id found? ──► drop row      missing ──► no-op               │
//! │                                                                         │
//! │  Ordering: Vec push order IS the listing order (insertion order).      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation is NOT here; the lifecycle service rejects bad drafts
//! before they reach this module.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use docket_core::{
    document_totals, line_total, Customer, CustomerDraft, CustomerPatch, DeliveryItem,
    DeliveryItemDraft, DeliveryNote, DeliveryNotePatch, DocumentCounters, DocumentKind,
    DocumentPatch, Estimate, EstimateStatus, Invoice, InvoiceStatus, LineItem, LineItemDraft,
    NewDeliveryNote, NewDocument, PricedDocument, Product, ProductDraft, ProductPatch,
};

use crate::snapshot::Snapshot;

/// Owns all mutable collections plus the numbering counters.
///
/// Single synchronous writer; callers that need sharing wrap the whole
/// repository (or the service that owns it) in their own lock.
#[derive(Debug, Default)]
pub struct Repository {
    invoices: Vec<Invoice>,
    estimates: Vec<Estimate>,
    delivery_notes: Vec<DeliveryNote>,
    customers: Vec<Customer>,
    products: Vec<Product>,
    counters: DocumentCounters,
}

impl Repository {
    /// Creates an empty repository with all counters at 1.
    pub fn new() -> Self {
        Repository::default()
    }

    /// Rebuilds a repository from a persisted snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Repository {
            invoices: snapshot.invoices,
            estimates: snapshot.estimates,
            delivery_notes: snapshot.delivery_notes,
            customers: snapshot.customers,
            products: snapshot.products,
            counters: DocumentCounters {
                next_invoice: snapshot.next_invoice_number,
                next_estimate: snapshot.next_estimate_number,
                next_delivery: snapshot.next_delivery_number,
            },
        }
    }

    /// Captures the current state for persistence.
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            invoices: self.invoices.clone(),
            estimates: self.estimates.clone(),
            delivery_notes: self.delivery_notes.clone(),
            customers: self.customers.clone(),
            products: self.products.clone(),
            next_invoice_number: self.counters.next_invoice,
            next_estimate_number: self.counters.next_estimate,
            next_delivery_number: self.counters.next_delivery,
        }
    }

    /// Read access to the numbering counters (for status displays).
    pub fn counters(&self) -> &DocumentCounters {
        &self.counters
    }

    // =========================================================================
    // Invoices
    // =========================================================================

    /// All invoices in insertion order.
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Looks up an invoice by id.
    pub fn invoice(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|d| d.id == id)
    }

    /// Inserts a new invoice, assigning id, number, totals and timestamps.
    pub fn insert_invoice(&mut self, new: NewDocument<InvoiceStatus>) -> Invoice {
        let number = self.counters.next_number(DocumentKind::Invoice);
        let doc = materialize_document(number, new);
        debug!(id = %doc.id, number = %doc.number, "Inserted invoice");
        self.invoices.push(doc.clone());
        doc
    }

    /// Applies a partial update to an invoice.
    ///
    /// Returns the updated document, or `None` when no invoice has this
    /// id (silent no-op).
    pub fn update_invoice(
        &mut self,
        id: &str,
        patch: DocumentPatch<InvoiceStatus>,
    ) -> Option<Invoice> {
        let doc = self.invoices.iter_mut().find(|d| d.id == id)?;
        apply_document_patch(doc, patch);
        debug!(id = %doc.id, number = %doc.number, "Updated invoice");
        Some(doc.clone())
    }

    /// Removes an invoice. Returns whether a row was dropped.
    pub fn remove_invoice(&mut self, id: &str) -> bool {
        remove_by_id(&mut self.invoices, id, |d| &d.id, "invoice")
    }

    // =========================================================================
    // Estimates
    // =========================================================================

    /// All estimates in insertion order.
    pub fn estimates(&self) -> &[Estimate] {
        &self.estimates
    }

    /// Looks up an estimate by id.
    pub fn estimate(&self, id: &str) -> Option<&Estimate> {
        self.estimates.iter().find(|d| d.id == id)
    }

    /// Inserts a new estimate, assigning id, number, totals and timestamps.
    pub fn insert_estimate(&mut self, new: NewDocument<EstimateStatus>) -> Estimate {
        let number = self.counters.next_number(DocumentKind::Estimate);
        let doc = materialize_document(number, new);
        debug!(id = %doc.id, number = %doc.number, "Inserted estimate");
        self.estimates.push(doc.clone());
        doc
    }

    /// Applies a partial update to an estimate (silent no-op on missing id).
    pub fn update_estimate(
        &mut self,
        id: &str,
        patch: DocumentPatch<EstimateStatus>,
    ) -> Option<Estimate> {
        let doc = self.estimates.iter_mut().find(|d| d.id == id)?;
        apply_document_patch(doc, patch);
        debug!(id = %doc.id, number = %doc.number, "Updated estimate");
        Some(doc.clone())
    }

    /// Removes an estimate. Returns whether a row was dropped.
    pub fn remove_estimate(&mut self, id: &str) -> bool {
        remove_by_id(&mut self.estimates, id, |d| &d.id, "estimate")
    }

    // =========================================================================
    // Delivery Notes
    // =========================================================================

    /// All delivery notes in insertion order.
    pub fn delivery_notes(&self) -> &[DeliveryNote] {
        &self.delivery_notes
    }

    /// Looks up a delivery note by id.
    pub fn delivery_note(&self, id: &str) -> Option<&DeliveryNote> {
        self.delivery_notes.iter().find(|d| d.id == id)
    }

    /// Inserts a new delivery note, assigning id, number and timestamps.
    pub fn insert_delivery_note(&mut self, new: NewDeliveryNote) -> DeliveryNote {
        let now = Utc::now();
        let note = DeliveryNote {
            id: Uuid::new_v4().to_string(),
            number: self.counters.next_number(DocumentKind::DeliveryNote),
            customer_id: new.customer_id,
            delivery_date: new.delivery_date,
            items: materialize_delivery_items(new.items),
            status: new.status,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %note.id, number = %note.number, "Inserted delivery note");
        self.delivery_notes.push(note.clone());
        note
    }

    /// Applies a partial update to a delivery note (silent no-op on
    /// missing id).
    pub fn update_delivery_note(
        &mut self,
        id: &str,
        patch: DeliveryNotePatch,
    ) -> Option<DeliveryNote> {
        let note = self.delivery_notes.iter_mut().find(|d| d.id == id)?;

        if let Some(customer_id) = patch.customer_id {
            note.customer_id = customer_id;
        }
        if let Some(delivery_date) = patch.delivery_date {
            note.delivery_date = delivery_date;
        }
        if let Some(items) = patch.items {
            note.items = materialize_delivery_items(items);
        }
        if let Some(status) = patch.status {
            note.status = status;
        }
        if let Some(notes) = patch.notes {
            note.notes = Some(notes);
        }
        note.updated_at = Utc::now();

        debug!(id = %note.id, number = %note.number, "Updated delivery note");
        Some(note.clone())
    }

    /// Removes a delivery note. Returns whether a row was dropped.
    pub fn remove_delivery_note(&mut self, id: &str) -> bool {
        remove_by_id(&mut self.delivery_notes, id, |d| &d.id, "delivery note")
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// All customers in insertion order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Looks up a customer by id.
    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Inserts a new customer, assigning its id.
    pub fn insert_customer(&mut self, draft: CustomerDraft) -> Customer {
        let customer = Customer {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
        };
        debug!(id = %customer.id, name = %customer.name, "Inserted customer");
        self.customers.push(customer.clone());
        customer
    }

    /// Applies a partial update to a customer (silent no-op on missing id).
    ///
    /// Documents referencing this customer are untouched; they resolve
    /// the new values at read time through the id.
    pub fn update_customer(&mut self, id: &str, patch: CustomerPatch) -> Option<Customer> {
        let customer = self.customers.iter_mut().find(|c| c.id == id)?;

        if let Some(name) = patch.name {
            customer.name = name;
        }
        if let Some(email) = patch.email {
            customer.email = email;
        }
        if let Some(phone) = patch.phone {
            customer.phone = phone;
        }
        if let Some(address) = patch.address {
            customer.address = address;
        }

        debug!(id = %customer.id, "Updated customer");
        Some(customer.clone())
    }

    /// Removes a customer. Documents keep their now-dangling
    /// `customer_id`; readers render them as "customer not found".
    pub fn remove_customer(&mut self, id: &str) -> bool {
        remove_by_id(&mut self.customers, id, |c| &c.id, "customer")
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Inserts a new product, assigning its id.
    pub fn insert_product(&mut self, draft: ProductDraft) -> Product {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            price: draft.price,
            default_tax: draft.default_tax,
        };
        debug!(id = %product.id, name = %product.name, "Inserted product");
        self.products.push(product.clone());
        product
    }

    /// Applies a partial update to a product (silent no-op on missing id).
    ///
    /// Existing line items keep the price/tax they copied at selection
    /// time; only future selections see the new values.
    pub fn update_product(&mut self, id: &str, patch: ProductPatch) -> Option<Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(default_tax) = patch.default_tax {
            product.default_tax = default_tax;
        }

        debug!(id = %product.id, "Updated product");
        Some(product.clone())
    }

    /// Removes a product. Line items that referenced it keep their
    /// copied name and price.
    pub fn remove_product(&mut self, id: &str) -> bool {
        remove_by_id(&mut self.products, id, |p| &p.id, "product")
    }
}

// =============================================================================
// Materialization Helpers
// =============================================================================

/// Prices a batch of drafts into stored line items: assigns row ids and
/// derives each `line_total` through the pricing engine.
fn materialize_line_items(drafts: Vec<LineItemDraft>) -> Vec<LineItem> {
    drafts
        .into_iter()
        .map(|draft| LineItem {
            id: Uuid::new_v4().to_string(),
            line_total: line_total(
                draft.quantity,
                draft.price,
                draft.tax_percent,
                draft.discount_percent,
            ),
            product_id: draft.product_id,
            product_name: draft.product_name,
            quantity: draft.quantity,
            price: draft.price,
            tax_percent: draft.tax_percent,
            discount_percent: draft.discount_percent,
        })
        .collect()
}

fn materialize_delivery_items(drafts: Vec<DeliveryItemDraft>) -> Vec<DeliveryItem> {
    drafts
        .into_iter()
        .map(|draft| DeliveryItem {
            id: Uuid::new_v4().to_string(),
            product_id: draft.product_id,
            product_name: draft.product_name,
            quantity: draft.quantity,
        })
        .collect()
}

/// Builds a full priced document from its draft: uuid, assigned number,
/// priced items, document totals, fresh timestamps.
fn materialize_document<S>(number: String, new: NewDocument<S>) -> PricedDocument<S> {
    let line_items = materialize_line_items(new.line_items);
    let totals = document_totals(&line_items);
    let now = Utc::now();

    PricedDocument {
        id: Uuid::new_v4().to_string(),
        number,
        customer_id: new.customer_id,
        issue_date: new.issue_date,
        due_date: new.due_date,
        line_items,
        subtotal: totals.subtotal,
        total_discount: totals.total_discount,
        total_tax: totals.total_tax,
        grand_total: totals.grand_total,
        status: new.status,
        created_at: now,
        updated_at: now,
    }
}

/// Merges a patch into a stored priced document.
///
/// Totals are recomputed only when the patch carries `line_items`;
/// `id`, `number` and `created_at` are never touched.
fn apply_document_patch<S>(doc: &mut PricedDocument<S>, patch: DocumentPatch<S>) {
    if let Some(customer_id) = patch.customer_id {
        doc.customer_id = customer_id;
    }
    if let Some(issue_date) = patch.issue_date {
        doc.issue_date = issue_date;
    }
    if let Some(due_date) = patch.due_date {
        doc.due_date = due_date;
    }
    if let Some(items) = patch.line_items {
        doc.line_items = materialize_line_items(items);
        let totals = document_totals(&doc.line_items);
        doc.subtotal = totals.subtotal;
        doc.total_discount = totals.total_discount;
        doc.total_tax = totals.total_tax;
        doc.grand_total = totals.grand_total;
    }
    if let Some(status) = patch.status {
        doc.status = status;
    }
    doc.updated_at = Utc::now();
}

fn remove_by_id<T>(rows: &mut Vec<T>, id: &str, key: impl Fn(&T) -> &str, entity: &str) -> bool {
    let before = rows.len();
    rows.retain(|row| key(row) != id);
    let removed = rows.len() != before;
    if removed {
        debug!(id, entity, "Removed row");
    } else {
        debug!(id, entity, "Remove was a no-op (id not found)");
    }
    removed
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use docket_core::{DeliveryStatus, EPSILON};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_invoice(customer_id: &str, items: Vec<LineItemDraft>) -> NewDocument<InvoiceStatus> {
        NewDocument {
            customer_id: customer_id.to_string(),
            issue_date: date(2024, 12, 1),
            due_date: date(2024, 12, 31),
            line_items: items,
            status: InvoiceStatus::Unpaid,
        }
    }

    fn draft(name: &str, quantity: f64, price: f64, tax: f64, discount: f64) -> LineItemDraft {
        LineItemDraft {
            product_id: None,
            product_name: name.to_string(),
            quantity,
            price,
            tax_percent: tax,
            discount_percent: discount,
        }
    }

    #[test]
    fn test_insert_invoice_assigns_everything() {
        let mut repo = Repository::new();
        let invoice = repo.insert_invoice(new_invoice(
            "c1",
            vec![draft("Web Development", 40.0, 125.0, 10.0, 0.0)],
        ));

        assert_eq!(invoice.number, "INV-001");
        assert!(!invoice.id.is_empty());
        assert!(!invoice.line_items[0].id.is_empty());
        assert!((invoice.line_items[0].line_total - 5500.0).abs() < EPSILON);
        assert!((invoice.grand_total - 5500.0).abs() < EPSILON);
        assert_eq!(invoice.created_at, invoice.updated_at);
        assert_eq!(repo.invoices().len(), 1);
    }

    #[test]
    fn test_numbers_are_sequential_per_kind() {
        let mut repo = Repository::new();
        let a = repo.insert_invoice(new_invoice("c1", vec![]));
        let b = repo.insert_invoice(new_invoice("c1", vec![]));
        let note = repo.insert_delivery_note(NewDeliveryNote {
            customer_id: "c1".to_string(),
            delivery_date: date(2024, 12, 20),
            items: vec![],
            status: DeliveryStatus::Pending,
            notes: None,
        });

        assert_eq!(a.number, "INV-001");
        assert_eq!(b.number, "INV-002");
        assert_eq!(note.number, "DN-001");
    }

    #[test]
    fn test_update_without_items_keeps_totals() {
        let mut repo = Repository::new();
        let invoice = repo.insert_invoice(new_invoice(
            "c1",
            vec![draft("Consulting", 10.0, 150.0, 10.0, 5.0)],
        ));

        let patch = DocumentPatch {
            status: Some(InvoiceStatus::Paid),
            ..DocumentPatch::default()
        };
        let updated = repo.update_invoice(&invoice.id, patch).unwrap();

        assert_eq!(updated.status, InvoiceStatus::Paid);
        assert_eq!(updated.grand_total, invoice.grand_total);
        assert_eq!(updated.line_items, invoice.line_items);
        assert!(updated.updated_at >= invoice.updated_at);
        assert_eq!(updated.created_at, invoice.created_at);
        assert_eq!(updated.number, invoice.number);
    }

    #[test]
    fn test_update_with_items_reprices() {
        let mut repo = Repository::new();
        let invoice = repo.insert_invoice(new_invoice(
            "c1",
            vec![draft("Consulting", 10.0, 150.0, 0.0, 0.0)],
        ));
        assert!((invoice.grand_total - 1500.0).abs() < EPSILON);

        let patch = DocumentPatch {
            line_items: Some(vec![draft("Consulting", 20.0, 150.0, 10.0, 0.0)]),
            ..DocumentPatch::default()
        };
        let updated = repo.update_invoice(&invoice.id, patch).unwrap();

        assert!((updated.subtotal - 3000.0).abs() < EPSILON);
        assert!((updated.grand_total - 3300.0).abs() < EPSILON);
    }

    #[test]
    fn test_update_missing_id_is_silent_noop() {
        let mut repo = Repository::new();
        repo.insert_invoice(new_invoice("c1", vec![]));

        let result = repo.update_invoice("no-such-id", DocumentPatch::default());
        assert!(result.is_none());
        assert_eq!(repo.invoices().len(), 1);
    }

    #[test]
    fn test_remove_missing_id_is_silent_noop() {
        let mut repo = Repository::new();
        repo.insert_invoice(new_invoice("c1", vec![]));

        assert!(!repo.remove_invoice("no-such-id"));
        assert_eq!(repo.invoices().len(), 1);
    }

    #[test]
    fn test_removed_number_is_never_reused() {
        let mut repo = Repository::new();
        let a = repo.insert_invoice(new_invoice("c1", vec![]));
        assert_eq!(a.number, "INV-001");

        assert!(repo.remove_invoice(&a.id));
        let b = repo.insert_invoice(new_invoice("c1", vec![]));
        assert_eq!(b.number, "INV-002");
    }

    #[test]
    fn test_listing_preserves_insertion_order() {
        let mut repo = Repository::new();
        for _ in 0..4 {
            repo.insert_estimate(NewDocument {
                customer_id: "c1".to_string(),
                issue_date: date(2024, 12, 1),
                due_date: date(2025, 1, 1),
                line_items: vec![],
                status: EstimateStatus::Sent,
            });
        }

        let numbers: Vec<&str> = repo.estimates().iter().map(|e| e.number.as_str()).collect();
        assert_eq!(numbers, ["EST-001", "EST-002", "EST-003", "EST-004"]);
    }

    #[test]
    fn test_customer_deletion_leaves_documents_dangling() {
        let mut repo = Repository::new();
        let customer = repo.insert_customer(CustomerDraft {
            name: "Acme Corporation".to_string(),
            email: "billing@acme.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Business Ave".to_string(),
        });
        let invoice = repo.insert_invoice(new_invoice(&customer.id, vec![]));

        assert!(repo.remove_customer(&customer.id));
        let stored = repo.invoice(&invoice.id).unwrap();
        assert_eq!(stored.customer_id, customer.id);
        assert!(repo.customer(&stored.customer_id).is_none());
    }

    #[test]
    fn test_product_edit_never_rewrites_line_items() {
        let mut repo = Repository::new();
        let product = repo.insert_product(ProductDraft {
            name: "Web Development".to_string(),
            price: 125.0,
            default_tax: 10.0,
        });

        let invoice = repo.insert_invoice(new_invoice(
            "c1",
            vec![LineItemDraft {
                product_id: Some(product.id.clone()),
                product_name: product.name.clone(),
                quantity: 40.0,
                price: product.price,
                tax_percent: product.default_tax,
                discount_percent: 0.0,
            }],
        ));

        let changed = repo.update_product(
            &product.id,
            ProductPatch {
                price: Some(999.0),
                ..ProductPatch::default()
            },
        );
        assert!(changed.is_some());

        let stored = repo.invoice(&invoice.id).unwrap();
        assert_eq!(stored.line_items[0].price, 125.0);
    }

    #[test]
    fn test_snapshot_round_trip_preserves_counters() {
        let mut repo = Repository::new();
        repo.insert_invoice(new_invoice("c1", vec![]));
        repo.insert_invoice(new_invoice("c1", vec![]));

        let mut restored = Repository::from_snapshot(repo.to_snapshot());
        assert_eq!(restored.counters().peek(DocumentKind::Invoice), 3);
        assert_eq!(restored.invoices().len(), 2);

        let c = restored.insert_invoice(new_invoice("c1", vec![]));
        assert_eq!(c.number, "INV-003");
    }
}
