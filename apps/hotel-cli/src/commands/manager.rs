//! # Manager Commands
//!
//! Room price/image changes and the per-manager update log.

use std::io::{BufRead, Write};

use crate::error::CliError;
use crate::render::{write_rows, write_status};
use crate::session::Session;
use crate::shell::Prompter;
use hotel_core::validation::{parse_price, validate_image_url};
use hotel_core::{CoreError, RoomUpdateOutcome, RoomUpdateRequest};

/// Sets a room's price and image URL. Only the hotel's manager may do so.
pub async fn update_room_info<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let manager_id = io.ask_id("\tEnter manager userID: ", "userID", session.user_id())?;
    let hotel_id = io.ask_id("\tEnter hotelID: ", "hotelID", None)?;
    let room_number = io.ask_id("\tEnter room number: ", "room number", None)?;
    let price = io.ask("\tEnter new price: ", parse_price)?;
    let image_url = io.ask("\tEnter new image URL: ", validate_image_url)?;

    let request = RoomUpdateRequest {
        manager_id,
        hotel_id,
        room_number,
        price,
        image_url,
    };

    match session.db().room_updates().update_room_info(&request).await? {
        RoomUpdateOutcome::Updated(update) => io.say(format_args!(
            "\tRoom Info updated. (updateNumber = {})",
            update.update_number
        )),
        RoomUpdateOutcome::NotManager => Err(CoreError::NotHotelManager {
            manager_id,
            hotel_id,
        }
        .into()),
        RoomUpdateOutcome::UnknownRoom => Err(CoreError::RoomNotFound {
            hotel_id,
            room_number,
        }
        .into()),
    }
}

/// The manager's five latest room updates.
pub async fn view_recent_updates<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let manager_id = io.ask_id("\tEnter manager userID: ", "userID", session.user_id())?;

    let rows = session.db().room_updates().recent_for_manager(manager_id).await?;

    write_rows(io.output(), session.format(), &rows)?;
    write_status(
        io.output(),
        session.format(),
        &format!("Recent room updates: {}", rows.len()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{output, prompter, session};
    use crate::config::OutputFormat;
    use crate::error::ErrorCode;

    #[tokio::test]
    async fn test_manager_updates_room() {
        let mut session = session(OutputFormat::Tsv).await;
        session.log_in(2);

        let mut io = prompter("\n1\n101\n-1\n135\nhttps://img.example/101.jpg\n");
        update_room_info(&mut session, &mut io).await.unwrap();

        let text = output(io);
        assert!(text.contains("price must not be negative"));
        assert!(text.contains("Room Info updated. (updateNumber = 1)"));

        let room = session.db().hotels().get_room(1, 101).await.unwrap().unwrap();
        assert_eq!(room.price, 135);
        assert_eq!(room.image_url.as_deref(), Some("https://img.example/101.jpg"));
    }

    #[tokio::test]
    async fn test_customer_cannot_update_room() {
        let mut session = session(OutputFormat::Tsv).await;

        let mut io = prompter("1\n1\n101\n10\nhttps://img.example/x.jpg\n");
        let err = update_room_info(&mut session, &mut io).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);

        let room = session.db().hotels().get_room(1, 101).await.unwrap().unwrap();
        assert_eq!(room.price, 120);
    }

    #[tokio::test]
    async fn test_update_unknown_room() {
        let mut session = session(OutputFormat::Tsv).await;

        let mut io = prompter("2\n1\n999\n10\nhttps://img.example/x.jpg\n");
        let err = update_room_info(&mut session, &mut io).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_recent_updates_capped_newest_first() {
        let mut session = session(OutputFormat::Tsv).await;
        let updates = session.db().room_updates();

        for price in 100..107 {
            let request = RoomUpdateRequest {
                manager_id: 2,
                hotel_id: 1,
                room_number: 102,
                price,
                image_url: "https://img.example/102.jpg".to_string(),
            };
            updates.update_room_info(&request).await.unwrap();
        }

        let mut io = prompter("2\n");
        view_recent_updates(&mut session, &mut io).await.unwrap();

        let text = output(io);
        let numbers: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.contains("updateNumber"))
            .skip(1)
            .take_while(|l| !l.starts_with("Recent"))
            .filter_map(|l| l.split('\t').next())
            .collect();
        assert_eq!(numbers, vec!["7", "6", "5", "4", "3"]);
        assert!(text.contains("Recent room updates: 5"));
    }
}
