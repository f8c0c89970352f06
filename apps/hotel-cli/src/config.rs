//! # Configuration
//!
//! Command line arguments, each with an environment variable fallback.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--database`, `--format`, ...)
//! 2. Environment variables (`HOTEL_*`)
//! 3. Defaults (this file)

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use hotel_db::DbConfig;

/// How query results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated header line and rows, then a status line.
    #[default]
    Tsv,
    /// A JSON array of records.
    Json,
}

/// Hotel Desk configuration.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hotel",
    version,
    about = "Interactive terminal for booking hotel rooms and managing hotels"
)]
pub struct HotelConfig {
    /// SQLite database file (`:memory:` for a throwaway database)
    #[arg(long, short = 'd', env = "HOTEL_DB_PATH", default_value = "hotel.db")]
    pub database: PathBuf,

    /// Database server port. Accepted for parity with server databases;
    /// the embedded SQLite engine ignores it.
    #[arg(long, env = "HOTEL_DB_PORT")]
    pub port: Option<u16>,

    /// Database user name. Ignored by SQLite, like `--port`.
    #[arg(long, short = 'u', env = "HOTEL_DB_USER")]
    pub user: Option<String>,

    /// Database password. Ignored by SQLite, like `--port`.
    #[arg(long, env = "HOTEL_DB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Output format for query results
    #[arg(long, value_enum, env = "HOTEL_OUTPUT_FORMAT", default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,

    /// Fill an empty database with demo data before starting
    #[arg(long)]
    pub seed: bool,

    /// Log every SQL statement to stderr
    #[arg(long)]
    pub debug: bool,

    /// Seconds to wait for the database connection
    #[arg(long, env = "HOTEL_CONNECT_TIMEOUT", default_value_t = 30)]
    pub connect_timeout: u64,
}

impl HotelConfig {
    /// Database settings derived from the arguments.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database).connect_timeout(Duration::from_secs(self.connect_timeout))
    }

    /// Server connection options that were given but have no effect on an
    /// embedded database.
    pub fn ignored_server_options(&self) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        if self.port.is_some() {
            ignored.push("port");
        }
        if self.user.is_some() {
            ignored.push("user");
        }
        if self.password.is_some() {
            ignored.push("password");
        }
        ignored
    }

    /// Default tracing filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}
