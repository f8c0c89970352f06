//! # Seed Data Generator
//!
//! Populates a database with demo hotels, rooms, users and bookings.
//!
//! ## Usage
//! ```bash
//! # Seed ./hotel.db (default)
//! cargo run -p hotel-db --bin seed
//!
//! # Specify database path
//! cargo run -p hotel-db --bin seed -- --db ./data/hotel.db
//! ```
//!
//! Every seeded account uses the password `password`. Managers are users
//! 1-4; customers follow.

use anyhow::Context;
use std::env;
use tracing_subscriber::EnvFilter;

use hotel_db::migrations::migration_status;
use hotel_db::seed::{seed_demo_data, table_counts, DEMO_PASSWORD};
use hotel_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut db_path = env::var("HOTEL_DB_PATH").unwrap_or_else(|_| String::from("./hotel.db"));

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
                println!("Hotel Desk Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./hotel.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Ignoring unknown argument: {}", other);
            }
        }
        i += 1;
    }

    println!("Hotel Desk Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path))
        .await
        .with_context(|| format!("failed to open database at {}", db_path))?;

    println!("✓ Connected to database");
    let (total, applied) = migration_status(db.pool()).await?;
    println!("✓ Migrations applied ({}/{})", applied, total);

    let start = std::time::Instant::now();
    match seed_demo_data(&db).await? {
        Some(summary) => {
            println!();
            println!("✓ Seeded in {:?}", start.elapsed());
            println!("  Users:     {}", summary.users);
            println!("  Hotels:    {}", summary.hotels);
            println!("  Rooms:     {}", summary.rooms);
            println!("  Companies: {}", summary.companies);
            println!("  Bookings:  {}", summary.bookings);
            println!("  Password for every account: {}", DEMO_PASSWORD);
        }
        None => {
            println!("⚠ Database already has users");
            println!("  Skipping seed to avoid duplicates.");
            println!("  Delete the database file to regenerate.");
        }
    }

    println!();
    println!("Table sizes:");
    let counts = table_counts(&db).await?;
    for row in &counts.rows {
        println!("  {:<20} {}", row[0], row[1]);
    }

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}
