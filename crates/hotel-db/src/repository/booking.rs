//! # Booking Repository
//!
//! Room bookings and the reports built from them.
//!
//! ## Booking Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    BookRoom                                             │
//! │                                                                         │
//! │  BookingRequest { customer, hotel, room, date }                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Room exists in Rooms? ──── no ───► BookingOutcome::UnknownRoom        │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  (hotel, room, date) free? ─ no ───► BookingOutcome::AlreadyBooked     │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  INSERT ... RETURNING bookingID                                        │
//! │       │   UNIQUE (hotelID, roomNumber, bookingDate) backs the check    │
//! │       ▼                                                                 │
//! │  BookingOutcome::Booked(RoomBooking)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each step is its own autocommitted statement. A booking that slips in
//! between the free-check and the insert trips the UNIQUE index and is
//! reported as `AlreadyBooked`.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::executor::StatementExecutor;
use crate::params;
use hotel_core::{
    BookingOutcome, BookingRequest, CustomerBooking, RegularCustomer, RoomBooking, RECENT_LIMIT,
};

const BOOKING_COLUMNS: &str = "bookingID AS booking_id, customerID AS customer_id, \
     hotelID AS hotel_id, roomNumber AS room_number, bookingDate AS booking_date";

/// Repository for room bookings.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    exec: StatementExecutor,
}

impl BookingRepository {
    /// Creates a new BookingRepository.
    pub fn new(exec: StatementExecutor) -> Self {
        BookingRepository { exec }
    }

    /// Whether the room already has a booking on `date`.
    pub async fn is_booked(&self, hotel_id: i64, room_number: i64, date: NaiveDate) -> DbResult<bool> {
        let count = self
            .exec
            .query_count(
                r#"
                SELECT bookingID FROM RoomBookings
                WHERE hotelID = ?1 AND roomNumber = ?2 AND bookingDate = ?3
                "#,
                params![hotel_id, room_number, date],
            )
            .await?;
        Ok(count > 0)
    }

    /// Books a room for one date.
    ///
    /// ## Returns
    /// * `Booked` - Row created, with its database-generated `bookingID`
    /// * `UnknownRoom` - No such `(hotel_id, room_number)`
    /// * `AlreadyBooked` - The room is taken on that date; nothing inserted
    pub async fn book(&self, request: &BookingRequest) -> DbResult<BookingOutcome> {
        let room_count = self
            .exec
            .query_count(
                "SELECT roomNumber FROM Rooms WHERE hotelID = ?1 AND roomNumber = ?2",
                params![request.hotel_id, request.room_number],
            )
            .await?;
        if room_count == 0 {
            debug!(
                hotel_id = request.hotel_id,
                room_number = request.room_number,
                "Booking rejected: unknown room"
            );
            return Ok(BookingOutcome::UnknownRoom);
        }

        if self
            .is_booked(request.hotel_id, request.room_number, request.booking_date)
            .await?
        {
            debug!(
                hotel_id = request.hotel_id,
                room_number = request.room_number,
                date = %request.booking_date,
                "Booking rejected: room unavailable"
            );
            return Ok(BookingOutcome::AlreadyBooked);
        }

        self.insert(request).await
    }

    /// Inserts the booking row. A taken `(hotel, room, date)` trips the
    /// UNIQUE index and comes back as `AlreadyBooked`.
    async fn insert(&self, request: &BookingRequest) -> DbResult<BookingOutcome> {
        let sql = format!(
            r#"
            INSERT INTO RoomBookings (customerID, hotelID, roomNumber, bookingDate)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING {}
            "#,
            BOOKING_COLUMNS
        );

        let inserted = self
            .exec
            .query_one_as::<RoomBooking>(
                &sql,
                params![
                    request.customer_id,
                    request.hotel_id,
                    request.room_number,
                    request.booking_date
                ],
            )
            .await;

        match inserted {
            Ok(booking) => {
                info!(
                    booking_id = booking.booking_id,
                    customer_id = booking.customer_id,
                    hotel_id = booking.hotel_id,
                    room_number = booking.room_number,
                    date = %booking.booking_date,
                    "Room booked"
                );
                Ok(BookingOutcome::Booked(booking))
            }
            Err(DbError::UniqueViolation { .. }) => {
                warn!(
                    hotel_id = request.hotel_id,
                    room_number = request.room_number,
                    "Concurrent booking took the room first"
                );
                Ok(BookingOutcome::AlreadyBooked)
            }
            Err(e) => Err(e),
        }
    }

    /// The customer's most recent bookings, newest date first.
    pub async fn recent_for_customer(&self, customer_id: i64) -> DbResult<Vec<CustomerBooking>> {
        self.exec
            .query_as(
                r#"
                SELECT b.bookingID AS booking_id,
                       b.hotelID AS hotel_id,
                       b.roomNumber AS room_number,
                       r.price,
                       b.bookingDate AS booking_date
                FROM RoomBookings b
                INNER JOIN Rooms r ON r.hotelID = b.hotelID AND r.roomNumber = b.roomNumber
                WHERE b.customerID = ?1
                ORDER BY b.bookingDate DESC, b.bookingID DESC
                LIMIT ?2
                "#,
                params![customer_id, i64::from(RECENT_LIMIT)],
            )
            .await
    }

    /// Every booking at a hotel, in booking order.
    pub async fn history_for_hotel(&self, hotel_id: i64) -> DbResult<Vec<RoomBooking>> {
        let sql = format!(
            "SELECT {} FROM RoomBookings WHERE hotelID = ?1 ORDER BY bookingID",
            BOOKING_COLUMNS
        );
        self.exec.query_as(&sql, params![hotel_id]).await
    }

    /// The customers with the most bookings at a hotel.
    ///
    /// Ties on count are broken by lower `customerID` first.
    pub async fn regular_customers(&self, hotel_id: i64) -> DbResult<Vec<RegularCustomer>> {
        self.exec
            .query_as(
                r#"
                SELECT customerID AS customer_id, COUNT(*) AS booking_count
                FROM RoomBookings
                WHERE hotelID = ?1
                GROUP BY customerID
                ORDER BY booking_count DESC, customerID
                LIMIT ?2
                "#,
                params![hotel_id, i64::from(RECENT_LIMIT)],
            )
            .await
    }
}
