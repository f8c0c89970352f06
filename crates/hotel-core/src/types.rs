//! # Domain Types
//!
//! Records used throughout Hotel Desk.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │      Hotel      │   │      Room       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  user_id        │◄──│  manager_user_id│   │  hotel_id  ┐ PK │       │
//! │  │  name           │   │  hotel_id       │◄──│  room_number┘   │       │
//! │  │  user_type      │   │  lat / lon      │   │  price          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │           ▲                                           ▲                 │
//! │           │               ┌───────────────────────────┤                 │
//! │  ┌────────┴────────┐   ┌──┴──────────────┐   ┌────────┴────────┐       │
//! │  │   RoomBooking   │   │   RoomRepair    │   │   RoomUpdate    │       │
//! │  │  booking_id     │   │  repair_id      │   │  update_number  │       │
//! │  │  customer_id    │   │  company_id     │   │  manager_id     │       │
//! │  │  booking_date   │   │  repair_date    │   │  updated_on     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Column Naming
//! The schema uses camelCase column names (`hotelID`, `roomNumber`). Queries
//! alias every projected column to the snake_case field name of the record
//! it is decoded into, so the `FromRow` derives need no per-field renames.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// User
// =============================================================================

/// Role of a user account.
///
/// Stored as the variant name (`'Customer'`, `'Manager'`, `'Admin'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum UserType {
    /// Books rooms. Every self-registered account is a customer.
    Customer,
    /// Runs one or more hotels.
    Manager,
    /// Back-office account.
    Admin,
}

impl Default for UserType {
    fn default() -> Self {
        UserType::Customer
    }
}

impl UserType {
    /// Name as stored in the `Users.userType` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Customer => "Customer",
            UserType::Manager => "Manager",
            UserType::Admin => "Admin",
        }
    }
}

/// A user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    pub user_id: i64,
    pub name: String,
    /// Plaintext, compared verbatim at login.
    #[serde(skip_serializing)]
    pub password: String,
    pub user_type: UserType,
}

// =============================================================================
// Hotel & Room
// =============================================================================

/// A hotel and its location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Hotel {
    pub hotel_id: i64,
    pub hotel_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub manager_user_id: i64,
}

impl Hotel {
    /// Distance from the given point to this hotel.
    pub fn distance_from(&self, latitude: f64, longitude: f64) -> f64 {
        crate::geo::calculate_distance(latitude, longitude, self.latitude, self.longitude)
    }
}

/// A room, identified by `(hotel_id, room_number)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Room {
    pub hotel_id: i64,
    pub room_number: i64,
    /// Nightly price in whole currency units.
    pub price: i64,
    pub image_url: Option<String>,
}

/// One line of a hotel's room listing (room joined with its hotel name).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RoomListing {
    pub hotel_name: String,
    pub room_number: i64,
    pub price: i64,
    pub image_url: Option<String>,
}

// =============================================================================
// Bookings
// =============================================================================

/// A booking of one room for one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RoomBooking {
    pub booking_id: i64,
    pub customer_id: i64,
    pub hotel_id: i64,
    pub room_number: i64,
    pub booking_date: NaiveDate,
}

/// A customer's booking joined with the room price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CustomerBooking {
    pub booking_id: i64,
    pub hotel_id: i64,
    pub room_number: i64,
    pub price: i64,
    pub booking_date: NaiveDate,
}

/// Input for a new booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub customer_id: i64,
    pub hotel_id: i64,
    pub room_number: i64,
    pub booking_date: NaiveDate,
}

/// Result of a booking attempt.
///
/// Unknown rooms and taken dates are expected outcomes the shell reacts to
/// by prompting again, so they are not errors.
#[derive(Debug, Clone)]
pub enum BookingOutcome {
    /// The booking row was created.
    Booked(RoomBooking),
    /// `(hotel_id, room_number)` does not name a room.
    UnknownRoom,
    /// The room already has a booking on that date.
    AlreadyBooked,
}

/// A customer ranked by number of bookings at one hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RegularCustomer {
    pub customer_id: i64,
    pub booking_count: i64,
}

// =============================================================================
// Room Updates
// =============================================================================

/// Input for a manager's room price/image change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomUpdateRequest {
    pub manager_id: i64,
    pub hotel_id: i64,
    pub room_number: i64,
    pub price: i64,
    pub image_url: String,
}

/// Result of a room update attempt.
#[derive(Debug, Clone)]
pub enum RoomUpdateOutcome {
    /// The room was changed and the change logged.
    Updated(RoomUpdate),
    /// The caller does not manage the hotel; nothing changed.
    NotManager,
    /// The hotel has no such room; nothing changed.
    UnknownRoom,
}

/// An entry of the room update audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RoomUpdate {
    pub update_number: i64,
    pub manager_id: i64,
    pub hotel_id: i64,
    pub room_number: i64,
    pub updated_on: DateTime<Utc>,
}

// =============================================================================
// Repairs
// =============================================================================

/// A maintenance company that can be hired for repairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct MaintenanceCompany {
    pub company_id: i64,
    pub name: String,
    pub address: Option<String>,
    pub is_certified: bool,
}

/// Input for a new repair request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairRequest {
    pub company_id: i64,
    pub hotel_id: i64,
    pub room_number: i64,
    pub repair_date: NaiveDate,
}

/// A repair request filed for a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RoomRepair {
    pub repair_id: i64,
    pub company_id: i64,
    pub hotel_id: i64,
    pub room_number: i64,
    pub repair_date: NaiveDate,
}

// =============================================================================
// Unit Tests
// =============================================================================
