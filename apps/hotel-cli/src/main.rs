//! # Hotel Desk Entry Point
//!
//! ```text
//! hotel [--database hotel.db] [--format tsv|json] [--seed] [--debug]
//! ```
//!
//! Exits with code 1 when the database cannot be opened, 0 otherwise.

use clap::Parser;

use hotel_cli::config::HotelConfig;

#[tokio::main]
async fn main() {
    let config = HotelConfig::parse();
    hotel_cli::init_tracing(&config);

    if let Err(e) = hotel_cli::run(config).await {
        eprintln!("Error - {:#}", e);
        std::process::exit(1);
    }
}
