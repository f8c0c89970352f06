//! # Validation Module
//!
//! Turns raw terminal input into typed values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell prompt (hotel-cli)                                     │
//! │  └── Reads one line, re-prompts when this module rejects it            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Numeric parsing (IDs, prices, coordinates)                        │
//! │  ├── Date parsing (YYYY-MM-DD)                                         │
//! │  └── Length / emptiness checks                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  ├── UNIQUE (hotelID, roomNumber, bookingDate)                         │
//! │  └── Foreign keys                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hotel_core::validation::{parse_date, parse_id};
//!
//! assert_eq!(parse_id("hotel ID", " 42 ").unwrap(), 42);
//! assert!(parse_date("booking date", "2024-02-30").is_err());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::{MAX_CREDENTIAL_LEN, MAX_IMAGE_URL_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Accepted date format for booking and repair dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// String Validators
// =============================================================================

fn required<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value)
}

/// Validates a user name for sign-up.
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_CREDENTIAL_LEN`] characters
pub fn validate_user_name(name: &str) -> ValidationResult<String> {
    let name = required("name", name)?;
    if name.chars().count() > MAX_CREDENTIAL_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_CREDENTIAL_LEN,
        });
    }
    Ok(name.to_string())
}

/// Validates a password.
///
/// The password is kept exactly as typed (no trimming) because login
/// compares it verbatim.
pub fn validate_password(password: &str) -> ValidationResult<String> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }
    if password.chars().count() > MAX_CREDENTIAL_LEN {
        return Err(ValidationError::TooLong {
            field: "password".to_string(),
            max: MAX_CREDENTIAL_LEN,
        });
    }
    Ok(password.to_string())
}

/// Validates a room image URL.
pub fn validate_image_url(url: &str) -> ValidationResult<String> {
    let url = required("image URL", url)?;
    if url.len() > MAX_IMAGE_URL_LEN {
        return Err(ValidationError::TooLong {
            field: "image URL".to_string(),
            max: MAX_IMAGE_URL_LEN,
        });
    }
    Ok(url.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a surrogate key or room number.
///
/// ## Rules
/// - Must be an integer
/// - Must be positive (> 0)
pub fn parse_id(field: &str, raw: &str) -> ValidationResult<i64> {
    let raw = required(field, raw)?;
    let id: i64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("'{}' is not a whole number", raw),
    })?;

    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(id)
}

/// Parses a room price.
///
/// ## Rules
/// - Must be an integer
/// - Zero is allowed, negatives are not
pub fn parse_price(raw: &str) -> ValidationResult<i64> {
    let raw = required("price", raw)?;
    let price: i64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: format!("'{}' is not a whole number", raw),
    })?;

    if price < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(price)
}

/// Parses a latitude or longitude.
///
/// Any finite decimal is accepted; coordinates are plain planar units.
pub fn parse_coordinate(field: &str, raw: &str) -> ValidationResult<f64> {
    let raw = required(field, raw)?;
    let value: f64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("'{}' is not a number", raw),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    Ok(value)
}

/// Parses a menu choice.
pub fn parse_menu_choice(raw: &str) -> ValidationResult<u32> {
    let raw = required("choice", raw)?;
    raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "choice".to_string(),
        reason: format!("'{}' is not a menu number", raw),
    })
}

// =============================================================================
// Date Validators
// =============================================================================

/// Parses a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(field: &str, raw: &str) -> ValidationResult<NaiveDate> {
    let raw = required(field, raw)?;
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "expected YYYY-MM-DD".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user_name() {
        assert_eq!(validate_user_name("  Alice ").unwrap(), "Alice");
        assert!(validate_user_name("").is_err());
        assert!(validate_user_name("   ").is_err());
        assert!(validate_user_name(&"A".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_password_keeps_whitespace() {
        assert_eq!(validate_password(" pw 123").unwrap(), " pw 123");
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("user ID", "7").unwrap(), 7);
        assert_eq!(parse_id("user ID", " 12 ").unwrap(), 12);

        assert!(matches!(
            parse_id("user ID", "0"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            parse_id("user ID", "seven"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_id("user ID", ""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("0").unwrap(), 0);
        assert_eq!(parse_price("149").unwrap(), 149);
        assert!(parse_price("-5").is_err());
        assert!(parse_price("12.50").is_err());
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("latitude", "33.5").unwrap(), 33.5);
        assert_eq!(parse_coordinate("latitude", "-117").unwrap(), -117.0);
        assert!(parse_coordinate("latitude", "north").is_err());
        assert!(parse_coordinate("latitude", "NaN").is_err());
        assert!(parse_coordinate("latitude", "inf").is_err());
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("booking date", "2024-05-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

        assert!(parse_date("booking date", "05/01/2024").is_err());
        assert!(parse_date("booking date", "2024-02-30").is_err());
        assert!(parse_date("booking date", "").is_err());
    }

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(parse_menu_choice("20").unwrap(), 20);
        assert!(parse_menu_choice("x").is_err());
        assert!(parse_menu_choice("-1").is_err());
    }
}
