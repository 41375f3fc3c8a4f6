//! # Demo Snapshot Writer
//!
//! Writes the demo dataset to a snapshot file for development.
//!
//! ## Usage
//! ```bash
//! # Write to the default location (./docket-store.json)
//! cargo run -p docket-store --bin seed
//!
//! # Custom location
//! cargo run -p docket-store --bin seed -- --out ./data/demo.json
//!
//! # Overwrite an existing snapshot
//! cargo run -p docket-store --bin seed -- --force
//! ```
//!
//! ## Seeded Data
//! - 5 customers, 5 service products
//! - 5 invoices (INV-001..005), 3 estimates, 3 delivery notes
//! - Numbering counters positioned at INV-006 / EST-004 / DN-004
//!
//! Every total in the file is computed by the pricing engine at seed
//! time, never hand-written.

use std::env;
use std::path::Path;

use docket_store::seed::demo_snapshot;
use docket_store::snapshot::{JsonFileStore, SnapshotStore, DEFAULT_SNAPSHOT_FILE};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut out = String::from(DEFAULT_SNAPSHOT_FILE);
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => {
                force = true;
            }
            "--help" | "-h" => {
                println!("Docket Demo Snapshot Writer");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  -o, --out <PATH>   Snapshot file path (default: ./{})",
                    DEFAULT_SNAPSHOT_FILE
                );
                println!("  -f, --force        Overwrite an existing snapshot");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Docket Demo Snapshot Writer");
    println!("==============================");
    println!("Output: {}", out);
    println!();

    if Path::new(&out).exists() && !force {
        println!("⚠ {} already exists", out);
        println!("  Pass --force to overwrite it.");
        return Ok(());
    }

    let snapshot = demo_snapshot();
    println!("✓ Built demo snapshot");
    println!("  Customers:      {}", snapshot.customers.len());
    println!("  Products:       {}", snapshot.products.len());
    println!("  Invoices:       {}", snapshot.invoices.len());
    println!("  Estimates:      {}", snapshot.estimates.len());
    println!("  Delivery notes: {}", snapshot.delivery_notes.len());
    println!(
        "  Next numbers:   INV-{:03} / EST-{:03} / DN-{:03}",
        snapshot.next_invoice_number, snapshot.next_estimate_number, snapshot.next_delivery_number
    );

    let store = JsonFileStore::new(&out);
    store.save(&snapshot)?;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
