//! # Seed Data Generator
//!
//! Populates a store with demo customers for development.
//!
//! ## Usage
//! ```bash
//! # 40 customers (default) into ./clientele_dev.db
//! cargo run -p clientele-db --bin clientele-seed
//!
//! # Custom amount and file
//! cargo run -p clientele-db --bin clientele-seed -- --count 200 --db ./data/clientele.db
//! ```
//!
//! Customers get ids `DEMO-0001`, `DEMO-0002`, ... and are spread round-robin
//! across the existing categories. Ids already present are skipped, so the
//! tool can be re-run against the same file.

use std::time::Instant;

use clap::Parser;
use clientele_core::Customer;
use clientele_db::{Database, DbConfig, DbError};

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Chen", "Dana", "Emeka", "Farah", "Goran", "Hana", "Ivan", "Jun",
];

const LAST_NAMES: &[&str] = &[
    "Lin", "Okafor", "Petrov", "Silva", "Tanaka", "Weber", "Yilmaz", "Novak",
];

const NOTES: &[&str] = &[
    "",
    "Prefers email contact",
    "Pays on net-30 terms",
    "Met at trade fair",
    "",
];

#[derive(Parser)]
#[command(name = "clientele-seed", about = "Clientele demo data generator")]
struct Args {
    /// Number of customers to generate
    #[arg(short, long, default_value_t = 40)]
    count: usize,

    /// Database file path
    #[arg(short, long, default_value = "./clientele_dev.db")]
    db: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("🌱 Clientele Seed Data Generator");
    println!("================================");
    println!("Database:  {}", args.db);
    println!("Customers: {}", args.count);
    println!();

    let db = Database::new(DbConfig::new(&args.db)).await?;
    println!("✓ Connected to database");

    let categories = db.categories().list().await?;
    if categories.is_empty() {
        println!("⚠ No categories to assign customers to. Add one first.");
        db.close().await;
        return Ok(());
    }
    println!("✓ {} categories available", categories.len());

    let start = Instant::now();
    let mut generated = 0;
    let mut skipped = 0;

    for seed in 0..args.count {
        let category = &categories[seed % categories.len()];
        let customer = generate_customer(seed, category.id);

        match db.customers().insert(&customer).await {
            Ok(()) => generated += 1,
            Err(DbError::DuplicateId { .. }) => skipped += 1,
            Err(e) => {
                eprintln!("Failed to insert {}: {}", customer.id, e);
            }
        }
    }

    println!();
    println!(
        "✓ Generated {} customers in {:?} ({} already present)",
        generated,
        start.elapsed(),
        skipped
    );
    println!("  Total customers: {}", db.customers().count().await?);

    db.close().await;
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates one demo customer.
fn generate_customer(seed: usize, category_id: i64) -> Customer {
    let first = FIRST_NAMES[seed % FIRST_NAMES.len()];
    let last = LAST_NAMES[(seed / FIRST_NAMES.len()) % LAST_NAMES.len()];

    Customer::new(
        format!("DEMO-{:04}", seed + 1),
        format!("{} {}", first, last),
        Some(category_id),
        NOTES[seed % NOTES.len()],
    )
}
