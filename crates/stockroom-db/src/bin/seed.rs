//! # Seed Data Generator
//!
//! Populates a database with sample items, customers and a few purchases
//! for development.
//!
//! ## Usage
//! ```bash
//! # Default: ./stockroom_dev.db, 3 purchases
//! cargo run -p stockroom-db --bin seed
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//!
//! # Skip the sample purchases
//! cargo run -p stockroom-db --bin seed -- --no-purchases
//! ```

use clap::Parser;
use std::path::PathBuf;
use stockroom_core::{Money, NewCustomer, NewItem, PurchaseRequest};
use stockroom_db::{Database, DbConfig, PurchaseOutcome};
use tracing_subscriber::EnvFilter;

/// Sample stock: (name, quantity, price in cents)
const ITEMS: &[(&str, i64, i64)] = &[
    ("Hex Bolt M8", 400, 35),
    ("Hex Nut M8", 650, 12),
    ("Washer 8mm", 900, 5),
    ("Wood Screw 4x40", 1200, 8),
    ("Claw Hammer", 18, 1899),
    ("Tape Measure 5m", 25, 899),
    ("Spirit Level 600mm", 9, 2450),
    ("Utility Knife", 30, 649),
    ("Masking Tape", 60, 299),
    ("Safety Glasses", 40, 499),
    ("Work Gloves", 35, 799),
    ("Cordless Drill", 4, 8999),
];

/// Sample customers: (name, email, phone)
const CUSTOMERS: &[(&str, &str, &str)] = &[
    ("Ada Lovelace", "ada@example.com", "555-0100"),
    ("Charles Babbage", "charles@example.com", "555-0101"),
    ("Grace Hopper", "grace@example.com", "555-0102"),
    ("Alan Turing", "alan@example.com", "555-0103"),
    ("Katherine Johnson", "katherine@example.com", "555-0104"),
];

/// Stockroom Seed Data Generator
#[derive(Debug, Parser)]
#[command(name = "seed")]
struct SeedArgs {
    /// Database file path
    #[arg(short, long, default_value = "./stockroom_dev.db")]
    db: PathBuf,

    /// Only create items and customers
    #[arg(long)]
    no_purchases: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = SeedArgs::parse();

    println!("Stockroom Seed Data Generator");
    println!("=============================");
    println!("Database: {}", args.db.display());
    println!();

    let db = Database::new(DbConfig::new(args.db.clone())).await?;

    println!("✓ Connected to database");
    println!("✓ Schema ready");

    let existing = db.items().count().await? + db.customers().count().await?;
    if existing > 0 {
        println!("⚠ Database already has data ({} rows)", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let mut items = Vec::with_capacity(ITEMS.len());
    for (name, quantity, price_cents) in ITEMS {
        let item = db
            .items()
            .add(&NewItem::new(*name, *quantity, Money::from_cents(*price_cents)))
            .await?;
        items.push(item);
    }
    println!("✓ Added {} items", items.len());

    let mut customers = Vec::with_capacity(CUSTOMERS.len());
    for (name, email, phone) in CUSTOMERS {
        let customer = db
            .customers()
            .add(&NewCustomer::new(*name, *email, *phone))
            .await?;
        customers.push(customer);
    }
    println!("✓ Added {} customers", customers.len());

    if !args.no_purchases {
        let mut completed = 0;
        for (n, customer) in customers.iter().take(3).enumerate() {
            let item = &items[(n * 4) % items.len()];
            let request = PurchaseRequest {
                customer_id: customer.id,
                item_id: item.id,
                quantity: (n as i64) + 1,
            };
            match db.purchases().purchase(&request).await? {
                PurchaseOutcome::Completed(_) => completed += 1,
                PurchaseOutcome::Rejected(reason) => {
                    eprintln!("Sample purchase for {} rejected: {}", customer.name, reason);
                }
            }
        }
        println!("✓ Recorded {} purchases", completed);
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        SeedArgs::command().debug_assert();
    }

    #[test]
    fn test_args_defaults_and_flags() {
        let args = SeedArgs::try_parse_from(["seed"]).unwrap();
        assert_eq!(args.db, PathBuf::from("./stockroom_dev.db"));
        assert!(!args.no_purchases);

        let args = SeedArgs::try_parse_from(["seed", "-d", "/tmp/s.db", "--no-purchases"]).unwrap();
        assert_eq!(args.db, PathBuf::from("/tmp/s.db"));
        assert!(args.no_purchases);

        assert!(SeedArgs::try_parse_from(["seed", "--bogus"]).is_err());
    }
}
