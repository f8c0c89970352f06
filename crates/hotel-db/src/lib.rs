//! # hotel-db: Database Layer for Hotel Desk
//!
//! Every SQL statement the shell issues lives in this crate. It uses SQLite
//! through sqlx, with all statements routed through one
//! [`StatementExecutor`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hotel Desk Data Flow                             │
//! │                                                                         │
//! │  Shell command (BookRoom)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     hotel-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ UserRepo      │    │              │  │   │
//! │  │   │ SqlitePool    │    │ HotelRepo     │    │ 001_init.sql │  │   │
//! │  │   │      │        │    │ BookingRepo   │    │              │  │   │
//! │  │   │      ▼        │◄───│ RoomUpdateRepo│    │              │  │   │
//! │  │   │ Statement     │    │ RepairRepo    │    │              │  │   │
//! │  │   │ Executor      │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database (hotel.db)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Opening and closing the database
//! - [`executor`] - The statement executor and bound parameters
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - One repository per table group
//! - [`seed`] - Deterministic demo data
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hotel_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("hotel.db")).await?;
//! let user = db.users().create("Alice", "pw123").await?;
//! let hotels = db.hotels().within_radius(10.0, 20.0).await?;
//! db.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod executor;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use executor::{ResultSet, SqlValue, StatementExecutor};
pub use pool::{Database, DbConfig};

pub use repository::booking::BookingRepository;
pub use repository::hotel::HotelRepository;
pub use repository::repair::RepairRepository;
pub use repository::room_update::RoomUpdateRepository;
pub use repository::user::UserRepository;
