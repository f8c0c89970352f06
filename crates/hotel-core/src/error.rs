//! # Error Types
//!
//! Domain-specific error types for hotel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hotel-core errors (this file)                                         │
//! │  ├── CoreError        - Domain rule failures                           │
//! │  └── ValidationError  - Input parsing/validation failures              │
//! │                                                                         │
//! │  hotel-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  hotel-cli errors (in app)                                             │
//! │  └── CliError         - What the shell prints                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain rule failures.
///
/// These are raised by domain operations after the database has been
/// consulted, e.g. a room that does not exist or a manager acting on a hotel
/// they do not run.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Hotel does not exist.
    #[error("Hotel not found: {0}")]
    HotelNotFound(i64),

    /// Room does not exist in the given hotel.
    #[error("Room {room_number} not found in hotel {hotel_id}")]
    RoomNotFound { hotel_id: i64, room_number: i64 },

    /// Room already has a booking on the requested date.
    ///
    /// ## User Workflow
    /// ```text
    /// Book room 101 on 2024-05-01
    ///      │
    ///      ▼
    /// Existing booking for (hotel 3, room 101, 2024-05-01)
    ///      │
    ///      ▼
    /// RoomUnavailable { .. } → shell asks for another date
    /// ```
    #[error("Room {room_number} in hotel {hotel_id} is not available on {date}")]
    RoomUnavailable {
        hotel_id: i64,
        room_number: i64,
        date: String,
    },

    /// User is not the manager of the hotel they tried to modify.
    #[error("User {manager_id} does not manage hotel {hotel_id}")]
    NotHotelManager { manager_id: i64, hotel_id: i64 },

    /// Login credentials did not match any user.
    #[error("Invalid user ID or password")]
    InvalidCredentials,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while turning raw terminal input into typed values, before any
/// statement is issued.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., not a number, not a date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
