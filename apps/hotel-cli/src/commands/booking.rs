//! # Booking Commands
//!
//! Booking a room and the three booking reports.
//!
//! ## Booking Prompts
//! ```text
//! customer userID [session user] ──► hotelID ── unknown ──► HotelNotFound
//!                                        │
//!                                        ▼
//!                 ┌──────────────► room number ── not a room of the hotel
//!                 └──────────────────────┘
//!                                        │
//!                                        ▼
//!                 ┌──────────────► date ── room taken that day
//!                 └──────────────────────┘
//!                                        │
//!                                        ▼
//!                         INSERT ... RETURNING bookingID
//! ```

use std::io::{BufRead, Write};

use crate::error::CliError;
use crate::render::{write_rows, write_status};
use crate::session::Session;
use crate::shell::Prompter;
use hotel_core::validation::parse_date;
use hotel_core::{BookingOutcome, BookingRequest, CoreError};

/// Books a room for one date, re-prompting for room and date until both
/// are usable.
pub async fn book_room<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let customer_id = io.ask_id("\tEnter customer userID: ", "userID", session.user_id())?;
    let hotel_id = io.ask_id("\tEnter hotelID: ", "hotelID", None)?;

    let hotels = session.db().hotels();
    if hotels.get_by_id(hotel_id).await?.is_none() {
        return Err(CoreError::HotelNotFound(hotel_id).into());
    }

    let mut prompt = "\tEnter room number: ";
    let room_number = loop {
        let room_number = io.ask_id(prompt, "room number", None)?;
        if hotels.room_exists(hotel_id, room_number).await? {
            break room_number;
        }
        prompt = "\tInvalid room number! Enter a new room number: ";
    };

    let bookings = session.db().bookings();
    let booking_date = loop {
        let date = io.ask("\tEnter booking date (YYYY-MM-DD): ", |s| {
            parse_date("booking date", s)
        })?;
        if !bookings.is_booked(hotel_id, room_number, date).await? {
            break date;
        }
        io.say("Sorry, the room selected isn't available on the date desired")?;
    };

    let request = BookingRequest {
        customer_id,
        hotel_id,
        room_number,
        booking_date,
    };

    match bookings.book(&request).await? {
        BookingOutcome::Booked(booking) => io.say(format_args!(
            "Successfully booked room! (bookingID = {})",
            booking.booking_id
        )),
        BookingOutcome::AlreadyBooked => Err(CoreError::RoomUnavailable {
            hotel_id,
            room_number,
            date: booking_date.to_string(),
        }
        .into()),
        BookingOutcome::UnknownRoom => Err(CoreError::RoomNotFound {
            hotel_id,
            room_number,
        }
        .into()),
    }
}

/// A customer's five most recent bookings.
pub async fn view_recent_bookings<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let customer_id = io.ask_id("\tEnter customer userID: ", "userID", session.user_id())?;

    let rows = session.db().bookings().recent_for_customer(customer_id).await?;

    write_rows(io.output(), session.format(), &rows)?;
    write_status(
        io.output(),
        session.format(),
        &format!("Recent bookings: {}", rows.len()),
    )
}

/// Every booking taken at a hotel.
pub async fn view_booking_history<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let hotel_id = io.ask_id("\tEnter hotelID: ", "hotelID", None)?;

    let rows = session.db().bookings().history_for_hotel(hotel_id).await?;

    write_rows(io.output(), session.format(), &rows)?;
    write_status(
        io.output(),
        session.format(),
        &format!("Bookings at the hotel: {}", rows.len()),
    )
}

pub async fn view_regular_customers<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let hotel_id = io.ask_id("\tEnter hotelID: ", "hotelID", None)?;

    let rows = session.db().bookings().regular_customers(hotel_id).await?;

    write_rows(io.output(), session.format(), &rows)?;
    write_status(
        io.output(),
        session.format(),
        &format!("Regular customers: {}", rows.len()),
    )
}
