//! # Hotel Commands
//!
//! Browsing hotels and their rooms.

use std::io::{BufRead, Write};

use crate::error::CliError;
use crate::render::{write_rows, write_status};
use crate::session::Session;
use crate::shell::Prompter;
use hotel_core::validation::{parse_coordinate, parse_id};
use hotel_core::NEARBY_RADIUS;

/// Lists hotels near a position typed by the user.
pub async fn view_hotels<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let latitude = io.ask("Please enter your current latitude: ", |s| {
        parse_coordinate("latitude", s)
    })?;
    let longitude = io.ask("Please enter your current longitude: ", |s| {
        parse_coordinate("longitude", s)
    })?;

    let hotels = session.db().hotels().within_radius(latitude, longitude).await?;

    write_rows(io.output(), session.format(), &hotels)?;
    write_status(
        io.output(),
        session.format(),
        &format!(
            "Hotels within {} units of current location: {}",
            NEARBY_RADIUS,
            hotels.len()
        ),
    )
}

/// Lists every room of one hotel.
pub async fn view_rooms<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let hotel_id = io.ask("Please enter the id for the hotel you want to view the rooms for: ", |s| {
        parse_id("hotelID", s)
    })?;

    let rooms = session.db().hotels().rooms(hotel_id).await?;

    write_rows(io.output(), session.format(), &rooms)?;
    write_status(
        io.output(),
        session.format(),
        &format!("Numbers of rooms in the hotel: {}", rooms.len()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{output, prompter, session};
    use crate::config::OutputFormat;

    #[tokio::test]
    async fn test_view_hotels() {
        let mut session = session(OutputFormat::Tsv).await;

        let mut io = prompter("0\n0\n");
        view_hotels(&mut session, &mut io).await.unwrap();

        let text = output(io);
        assert!(text.contains("hotelName\tlatitude\tlongitude\n"));
        assert!(text.contains("Harbor View\t10\t10\n"));
        assert!(!text.contains("Summit Lodge"));
        assert!(text.contains("Hotels within 30 units of current location: 1"));
    }

    #[tokio::test]
    async fn test_view_hotels_none_found() {
        let mut session = session(OutputFormat::Tsv).await;

        let mut io = prompter("north\n-200\n-200\n");
        view_hotels(&mut session, &mut io).await.unwrap();

        let text = output(io);
        assert!(!text.contains("hotelName"));
        assert!(text.contains("current location: 0"));
    }

    #[tokio::test]
    async fn test_view_rooms_json() {
        let mut session = session(OutputFormat::Json).await;

        let mut io = prompter("1\n");
        view_rooms(&mut session, &mut io).await.unwrap();

        let text = output(io);
        let start = text.find('[').unwrap();
        let rooms: serde_json::Value = serde_json::from_str(&text[start..]).unwrap();
        assert_eq!(rooms.as_array().unwrap().len(), 2);
        assert_eq!(rooms[1]["room_number"], 102);
        assert!(!text.contains("Numbers of rooms"));
    }
}
