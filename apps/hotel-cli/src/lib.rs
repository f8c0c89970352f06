//! # Hotel Desk CLI Library
//!
//! The `hotel` terminal: opens the database, runs the menu loop on
//! stdin/stdout and shuts down cleanly.
//!
//! ## Module Organization
//! ```text
//! hotel_cli/
//! ├── lib.rs          ◄─── You are here (startup & shutdown)
//! ├── config.rs       ◄─── clap arguments with HOTEL_* fallbacks
//! ├── session.rs      ◄─── Database handle + logged-in user
//! ├── shell.rs        ◄─── Prompter and menu loop
//! ├── commands/       ◄─── One handler per menu action
//! ├── render.rs       ◄─── TSV / JSON output
//! └── error.rs        ◄─── CliError shown to the user
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Process Lifetime                                 │
//! │                                                                         │
//! │  1. Parse HotelConfig ───────────────────────────────────────────────►  │
//! │     • flags, then HOTEL_* variables, then defaults                      │
//! │                                                                         │
//! │  2. Initialize Logging ──────────────────────────────────────────────►  │
//! │     • stderr, RUST_LOG or warn (debug with --debug)                     │
//! │                                                                         │
//! │  3. Connect to Database ─────────────────────────────────────────────►  │
//! │     • single SQLite connection, migrations applied                      │
//! │     • failure: message on stderr, exit code 1                           │
//! │                                                                         │
//! │  4. Seed (--seed, empty database only) ──────────────────────────────►  │
//! │                                                                         │
//! │  5. Menu loop until Exit or end of input ────────────────────────────►  │
//! │                                                                         │
//! │  6. Disconnect ──────────────────────────────────────────────────────►  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod shell;

use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::{debug, info, info_span, Instrument};
use tracing_subscriber::EnvFilter;

use config::HotelConfig;
use hotel_db::seed::seed_demo_data;
use hotel_db::Database;
use session::Session;
use shell::Prompter;

/// Runs the terminal on the process's stdin and stdout.
pub async fn run(config: HotelConfig) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with(config, stdin.lock(), stdout.lock()).await
}

/// Runs the terminal on the given streams.
///
/// Only a failed connection (or seed) is an error. Everything that goes
/// wrong inside the menu loop is reported there and the loop carries on.
pub async fn run_with<R: BufRead, W: Write>(
    config: HotelConfig,
    input: R,
    output: W,
) -> anyhow::Result<()> {
    let mut io = Prompter::new(input, output);

    let ignored = config.ignored_server_options();
    if !ignored.is_empty() {
        debug!(options = ?ignored, "Server connection options given; SQLite does not use them");
    }

    io.say("Connecting to database...")?;
    let db = Database::new(config.db_config())
        .await
        .context("Unable to Connect to Database")?;
    anyhow::ensure!(
        db.health_check().await,
        "Unable to Connect to Database: {} does not answer queries",
        config.database.display()
    );
    info!(path = %config.database.display(), "Database connected");

    if config.seed {
        match seed_demo_data(&db).await.context("Seeding demo data failed")? {
            Some(summary) => io.say(format_args!(
                "Seeded {} users, {} hotels, {} rooms",
                summary.users, summary.hotels, summary.rooms
            ))?,
            None => info!("Database already has users, skipping seed"),
        }
    }

    let mut session = Session::new(db, config.format);
    let span = info_span!("session", id = %session.id());
    let result = shell::run(&mut session, &mut io).instrument(span).await;

    io.say("Disconnecting from database...")?;
    session.teardown().await;
    io.say("Done\n\nBye !")?;

    result.map_err(|e| anyhow::anyhow!(e.message))
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so query output on stdout stays clean.
/// `RUST_LOG` overrides the level chosen by `--debug`.
pub fn init_tracing(config: &HotelConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
