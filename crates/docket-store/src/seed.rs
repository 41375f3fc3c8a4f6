//! # Demo Seed Data
//!
//! The canned dataset the demo build starts from: five customers, five
//! products, five invoices, three estimates and three delivery notes,
//! with the numbering counters positioned just past the seeded numbers
//! (next: INV-006 / EST-004 / DN-004).
//!
//! Derived figures are NOT hand-written here; every line total and
//! document total goes through the pricing engine, so the seed can never
//! drift from the arithmetic it demonstrates.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use docket_core::{
    document_totals, line_total, Customer, DeliveryItem, DeliveryNote, DeliveryStatus, Estimate,
    EstimateStatus, Invoice, InvoiceStatus, LineItem, PricedDocument, Product,
};

use crate::snapshot::Snapshot;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn line(
    id: &str,
    product_id: &str,
    name: &str,
    quantity: f64,
    price: f64,
    tax: f64,
    discount: f64,
) -> LineItem {
    LineItem {
        id: id.to_string(),
        product_id: Some(product_id.to_string()),
        product_name: name.to_string(),
        quantity,
        price,
        tax_percent: tax,
        discount_percent: discount,
        line_total: line_total(quantity, price, tax, discount),
    }
}

#[allow(clippy::too_many_arguments)]
fn priced<S>(
    id: &str,
    number: &str,
    customer_id: &str,
    issue_date: NaiveDate,
    due_date: NaiveDate,
    line_items: Vec<LineItem>,
    status: S,
    created_at: DateTime<Utc>,
) -> PricedDocument<S> {
    let totals = document_totals(&line_items);
    PricedDocument {
        id: id.to_string(),
        number: number.to_string(),
        customer_id: customer_id.to_string(),
        issue_date,
        due_date,
        line_items,
        subtotal: totals.subtotal,
        total_discount: totals.total_discount,
        total_tax: totals.total_tax,
        grand_total: totals.grand_total,
        status,
        created_at,
        updated_at: created_at,
    }
}

fn customer(id: &str, name: &str, email: &str, phone: &str, address: &str) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
    }
}

fn product(id: &str, name: &str, price: f64, default_tax: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        default_tax,
    }
}

fn delivery_item(id: &str, product_id: &str, name: &str, quantity: u32) -> DeliveryItem {
    DeliveryItem {
        id: id.to_string(),
        product_id: Some(product_id.to_string()),
        product_name: name.to_string(),
        quantity,
    }
}

fn demo_customers() -> Vec<Customer> {
    vec![
        customer(
            "1",
            "Acme Corporation",
            "billing@acme.com",
            "+1 (555) 987-6543",
            "456 Corporate Blvd, Business City, BC 67890",
        ),
        customer(
            "2",
            "Tech Innovators LLC",
            "accounts@techinnovators.com",
            "+1 (555) 456-7890",
            "789 Innovation Drive, Tech Valley, TV 13579",
        ),
        customer(
            "3",
            "Global Solutions Inc",
            "finance@globalsolutions.com",
            "+1 (555) 321-0987",
            "321 Solutions Way, Global City, GC 24680",
        ),
        customer(
            "4",
            "Creative Design Studio",
            "billing@creativedesign.com",
            "+1 (555) 654-3210",
            "654 Design Lane, Art District, AD 97531",
        ),
        customer(
            "5",
            "Premium Services Group",
            "payments@premiumservices.com",
            "+1 (555) 789-0123",
            "987 Premium Plaza, Service Center, SC 86420",
        ),
    ]
}

fn demo_products() -> Vec<Product> {
    vec![
        product("1", "Web Development", 125.0, 10.0),
        product("2", "UI/UX Design", 95.0, 10.0),
        product("3", "Consulting Services", 150.0, 10.0),
        product("4", "Mobile App Development", 140.0, 10.0),
        product("5", "Digital Marketing", 85.0, 10.0),
    ]
}

fn demo_invoices() -> Vec<Invoice> {
    vec![
        priced(
            "1",
            "INV-001",
            "1",
            date(2024, 12, 1),
            date(2024, 12, 31),
            vec![
                line("1", "1", "Web Development", 40.0, 125.0, 10.0, 0.0),
                line("2", "2", "UI/UX Design", 20.0, 95.0, 10.0, 5.0),
            ],
            InvoiceStatus::Paid,
            ts(2024, 12, 1, 8, 0),
        ),
        priced(
            "2",
            "INV-002",
            "2",
            date(2024, 12, 5),
            date(2025, 1, 5),
            vec![line("3", "3", "Consulting Services", 16.0, 150.0, 10.0, 0.0)],
            InvoiceStatus::Unpaid,
            ts(2024, 12, 5, 9, 30),
        ),
        priced(
            "3",
            "INV-003",
            "3",
            date(2024, 12, 10),
            date(2025, 1, 10),
            vec![line(
                "4",
                "4",
                "Mobile App Development",
                60.0,
                140.0,
                10.0,
                10.0,
            )],
            InvoiceStatus::Unpaid,
            ts(2024, 12, 10, 14, 15),
        ),
        priced(
            "4",
            "INV-004",
            "4",
            date(2024, 12, 15),
            date(2025, 1, 15),
            vec![
                line("5", "2", "UI/UX Design", 12.0, 95.0, 10.0, 0.0),
                line("6", "5", "Digital Marketing", 8.0, 85.0, 10.0, 0.0),
            ],
            InvoiceStatus::Draft,
            ts(2024, 12, 15, 11, 45),
        ),
        priced(
            "5",
            "INV-005",
            "5",
            date(2024, 12, 18),
            date(2025, 1, 18),
            vec![line("7", "1", "Web Development", 24.0, 125.0, 10.0, 5.0)],
            InvoiceStatus::Unpaid,
            ts(2024, 12, 18, 16, 20),
        ),
    ]
}

fn demo_estimates() -> Vec<Estimate> {
    vec![
        priced(
            "1",
            "EST-001",
            "1",
            date(2024, 11, 15),
            date(2024, 12, 15),
            vec![line("1", "1", "Web Development", 50.0, 125.0, 10.0, 0.0)],
            EstimateStatus::Sent,
            ts(2024, 11, 15, 10, 0),
        ),
        priced(
            "2",
            "EST-002",
            "2",
            date(2024, 11, 20),
            date(2024, 12, 20),
            vec![line("2", "2", "UI/UX Design", 30.0, 95.0, 10.0, 10.0)],
            EstimateStatus::Accepted,
            ts(2024, 11, 20, 14, 30),
        ),
        priced(
            "3",
            "EST-003",
            "3",
            date(2024, 12, 1),
            date(2025, 1, 1),
            vec![line(
                "3",
                "4",
                "Mobile App Development",
                80.0,
                140.0,
                10.0,
                5.0,
            )],
            EstimateStatus::Draft,
            ts(2024, 12, 1, 9, 15),
        ),
    ]
}

fn demo_delivery_notes() -> Vec<DeliveryNote> {
    vec![
        DeliveryNote {
            id: "1".to_string(),
            number: "DN-001".to_string(),
            customer_id: "1".to_string(),
            delivery_date: date(2024, 12, 20),
            items: vec![
                delivery_item("1", "1", "Web Development Project Files", 1),
                delivery_item("2", "2", "Design Assets Package", 1),
            ],
            status: DeliveryStatus::Delivered,
            notes: Some("Delivered to main office reception. Signed by John Doe.".to_string()),
            created_at: ts(2024, 12, 20, 10, 0),
            updated_at: ts(2024, 12, 20, 15, 30),
        },
        DeliveryNote {
            id: "2".to_string(),
            number: "DN-002".to_string(),
            customer_id: "2".to_string(),
            delivery_date: date(2024, 12, 22),
            items: vec![delivery_item("3", "3", "Consulting Report", 3)],
            status: DeliveryStatus::InTransit,
            notes: Some("Package dispatched via courier service.".to_string()),
            created_at: ts(2024, 12, 22, 8, 0),
            updated_at: ts(2024, 12, 22, 8, 0),
        },
        DeliveryNote {
            id: "3".to_string(),
            number: "DN-003".to_string(),
            customer_id: "4".to_string(),
            delivery_date: date(2024, 12, 25),
            items: vec![delivery_item("4", "5", "Marketing Materials", 5)],
            status: DeliveryStatus::Pending,
            notes: Some("Scheduled for delivery on Christmas day.".to_string()),
            created_at: ts(2024, 12, 23, 12, 0),
            updated_at: ts(2024, 12, 23, 12, 0),
        },
    ]
}

/// The full demo snapshot, counters positioned past the seeded numbers.
pub fn demo_snapshot() -> Snapshot {
    Snapshot {
        invoices: demo_invoices(),
        estimates: demo_estimates(),
        delivery_notes: demo_delivery_notes(),
        customers: demo_customers(),
        products: demo_products(),
        next_invoice_number: 6,
        next_estimate_number: 4,
        next_delivery_number: 4,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use docket_core::EPSILON;

    #[test]
    fn test_counts_and_counters() {
        let snapshot = demo_snapshot();
        assert_eq!(snapshot.invoices.len(), 5);
        assert_eq!(snapshot.estimates.len(), 3);
        assert_eq!(snapshot.delivery_notes.len(), 3);
        assert_eq!(snapshot.customers.len(), 5);
        assert_eq!(snapshot.products.len(), 5);
        assert_eq!(snapshot.next_invoice_number, 6);
        assert_eq!(snapshot.next_estimate_number, 4);
        assert_eq!(snapshot.next_delivery_number, 4);
    }

    #[test]
    fn test_numbers_are_sequential() {
        let snapshot = demo_snapshot();
        let numbers: Vec<&str> = snapshot.invoices.iter().map(|i| i.number.as_str()).collect();
        assert_eq!(
            numbers,
            ["INV-001", "INV-002", "INV-003", "INV-004", "INV-005"]
        );
    }

    #[test]
    fn test_every_seeded_total_matches_the_engine() {
        let snapshot = demo_snapshot();

        for invoice in &snapshot.invoices {
            let totals = document_totals(&invoice.line_items);
            assert!((invoice.subtotal - totals.subtotal).abs() < EPSILON);
            assert!((invoice.total_discount - totals.total_discount).abs() < EPSILON);
            assert!((invoice.total_tax - totals.total_tax).abs() < EPSILON);
            assert!((invoice.grand_total - totals.grand_total).abs() < EPSILON);

            let line_sum: f64 = invoice.line_items.iter().map(|l| l.line_total).sum();
            assert!((invoice.grand_total - line_sum).abs() < EPSILON);
        }
    }

    #[test]
    fn test_known_seed_figures() {
        let snapshot = demo_snapshot();

        // INV-002: one undiscounted line, 16 × 150.00 at 10% tax.
        let inv2 = &snapshot.invoices[1];
        assert!((inv2.subtotal - 2400.0).abs() < EPSILON);
        assert!((inv2.grand_total - 2640.0).abs() < EPSILON);

        // EST-002: 30 × 95.00, 10% discount then 10% tax on 2565.00.
        let est2 = &snapshot.estimates[1];
        assert!((est2.total_discount - 285.0).abs() < EPSILON);
        assert!((est2.total_tax - 256.5).abs() < EPSILON);
        assert!((est2.grand_total - 2821.5).abs() < EPSILON);
    }

    #[test]
    fn test_document_references_resolve() {
        let snapshot = demo_snapshot();
        for invoice in &snapshot.invoices {
            assert!(snapshot
                .customers
                .iter()
                .any(|c| c.id == invoice.customer_id));
        }
        for note in &snapshot.delivery_notes {
            assert!(snapshot.customers.iter().any(|c| c.id == note.customer_id));
        }
    }
}
