//! # Seed Data Generator
//!
//! Populates the database with the sample catalog and discount codes for
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p verdant-db --bin seed
//!
//! # Specify database path
//! cargo run -p verdant-db --bin seed -- --db ./data/verdant.db
//! ```
//!
//! Seeding is idempotent: tables that already contain rows are skipped, so
//! re-running against a live database never duplicates data.

use std::env;

use verdant_db::seed::seed_database;
use verdant_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./verdant_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Verdant Nursery Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./verdant_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Verdant Nursery Seed Data Generator");
    println!("======================================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database (runs migrations)
    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");
    println!();

    let inserted = seed_database(&db).await?;

    if inserted == 0 {
        println!("⚠ Database already seeded, nothing to do.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!("✓ Inserted {} records", inserted);

    // Verify the catalog reads back
    println!();
    println!("Verifying catalog...");
    let plants = db.plants().list(None, None).await?;
    println!("  Catalog: {} plants", plants.len());

    let categories = db.plants().categories().await?;
    println!("  Categories: {}", categories.join(", "));

    let spring = db.discount_codes().find("SPRING20").await?;
    println!(
        "  SPRING20: {}",
        spring.map_or("missing!".to_string(), |c| c.describe())
    );

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
