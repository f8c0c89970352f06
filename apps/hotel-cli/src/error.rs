//! # CLI Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Hotel Desk                             │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command handler                                                 │  │
//! │  │  Result<(), CliError>                                            │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Database Error? ─── DbError::ForeignKeyViolation ──┐           │  │
//! │  │         │                                           │           │  │
//! │  │         ▼                                           ▼           │  │
//! │  │  Domain Error? ─── CoreError::NotHotelManager ──── CliError     │  │
//! │  │         │                                           │           │  │
//! │  │         ▼                                           │           │  │
//! │  │  stdin closed? ─── ErrorCode::EndOfInput ───────────┤           │  │
//! │  └─────────────────────────────────────────────────────┼───────────┘  │
//! │                                                        ▼              │
//! │  Shell: EndOfInput / Io ends the loop, anything else is printed and   │
//! │  the menu is shown again.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;

use hotel_core::{CoreError, ValidationError};
use hotel_db::DbError;

/// Error produced by a shell command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for shell commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced hotel, room or record does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Caller is not allowed to perform the operation
    Unauthorized,

    /// The request collides with existing data (room already booked)
    Conflict,

    /// Database operation failed
    DatabaseError,

    /// Terminal read/write failed
    Io,

    /// Standard input was closed
    EndOfInput,

    /// Internal error
    Internal,
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        CliError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    /// Creates the error raised when stdin is exhausted.
    pub fn end_of_input() -> Self {
        CliError::new(ErrorCode::EndOfInput, "end of input")
    }

    /// Whether the shell must stop after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self.code, ErrorCode::EndOfInput | ErrorCode::Io)
    }
}

/// Converts database errors to CLI errors.
impl From<DbError> for CliError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => CliError::not_found(&entity, &id),
            DbError::UniqueViolation { field, .. } => {
                CliError::new(ErrorCode::Conflict, format!("{} already exists", field))
            }
            DbError::ForeignKeyViolation { message } => {
                tracing::warn!("Foreign key violation: {}", message);
                CliError::validation("Invalid reference: unknown user, hotel, room or company")
            }
            DbError::ConstraintViolation(message) => CliError::validation(message),
            DbError::ConnectionFailed(_) => {
                CliError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                CliError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                CliError::new(ErrorCode::DatabaseError, format!("Database operation failed: {}", e))
            }
            DbError::Decode { column, message } => {
                tracing::error!(column = %column, "Decode failed: {}", message);
                CliError::new(ErrorCode::DatabaseError, "Database returned unreadable data")
            }
            DbError::PoolExhausted => {
                CliError::new(ErrorCode::DatabaseError, "Database connection busy")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                CliError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts domain errors to CLI errors.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::HotelNotFound(_) | CoreError::RoomNotFound { .. } => ErrorCode::NotFound,
            CoreError::RoomUnavailable { .. } => ErrorCode::Conflict,
            CoreError::NotHotelManager { .. } | CoreError::InvalidCredentials => {
                ErrorCode::Unauthorized
            }
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        CliError::new(code, err.to_string())
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::validation(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::new(ErrorCode::Io, err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::new(ErrorCode::Internal, format!("JSON output failed: {}", err))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_error_mapping() {
        let err: CliError = DbError::NotFound {
            entity: "Hotel".to_string(),
            id: "7".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Hotel not found: 7");

        let err: CliError = DbError::ForeignKeyViolation {
            message: "FOREIGN KEY constraint failed".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err: CliError = DbError::PoolExhausted.into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_core_error_mapping() {
        let err: CliError = CoreError::NotHotelManager {
            manager_id: 4,
            hotel_id: 1,
        }
        .into();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(err.message, "User 4 does not manage hotel 1");

        let err: CliError = CoreError::InvalidCredentials.into();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[test]
    fn test_fatal_codes() {
        assert!(CliError::end_of_input().is_fatal());
        let io: CliError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(io.is_fatal());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&CliError::validation("bad date")).unwrap();
        assert_eq!(json, r#"{"code":"VALIDATION_ERROR","message":"bad date"}"#);
    }
}
