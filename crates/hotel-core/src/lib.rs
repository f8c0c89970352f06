//! # hotel-core: Pure Domain Model for Hotel Desk
//!
//! This crate holds the record types, input rules and small calculations
//! shared by the database layer and the terminal front end. It performs no
//! I/O of any kind.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hotel Desk Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 hotel-cli (Interactive Shell)                   │   │
//! │  │    prompts ──► Command dispatch ──► render rows                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hotel-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │    geo    │  │  tabular  │  │ validation│  │   │
//! │  │   │   User    │  │ distance  │  │  headers  │  │  parsing  │  │   │
//! │  │   │  Booking  │  │  radius   │  │   cells   │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO TERMINAL • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    hotel-db (Database Layer)                    │   │
//! │  │          SQLite schema, statement executor, repositories        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Records (User, Hotel, Room, RoomBooking, ...)
//! - [`geo`] - Euclidean distance and the "nearby" radius
//! - [`tabular`] - Column headers and text cells for terminal output
//! - [`validation`] - Parsing of raw terminal input into typed values
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use hotel_core::geo::{calculate_distance, is_nearby};
//!
//! assert_eq!(calculate_distance(0.0, 0.0, 3.0, 4.0), 5.0);
//! assert!(is_nearby(0.0, 0.0, 10.0, 10.0));
//! assert!(!is_nearby(0.0, 0.0, 30.0, 0.0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod geo;
pub mod tabular;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use tabular::Tabular;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Radius, in coordinate units, used by the "hotels near me" listing.
///
/// Hotels strictly closer than this are listed; a hotel exactly on the
/// boundary is not.
pub const NEARBY_RADIUS: f64 = 30.0;

/// Number of rows returned by the "recent" and "top" listings
/// (recent bookings, recent room updates, regular customers).
pub const RECENT_LIMIT: u32 = 5;

/// Maximum length of user names and passwords accepted at sign-up.
pub const MAX_CREDENTIAL_LEN: usize = 50;

/// Maximum length of a room image URL.
pub const MAX_IMAGE_URL_LEN: usize = 400;
