//! # Repair Commands

use std::io::{BufRead, Write};

use crate::error::CliError;
use crate::render::{write_rows, write_status};
use crate::session::Session;
use crate::shell::Prompter;
use hotel_core::validation::parse_date;
use hotel_core::{CoreError, RepairRequest};

/// Files a repair request for a room with a maintenance company.
pub async fn place_repair_request<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let hotel_id = io.ask_id("\tEnter hotelID: ", "hotelID", None)?;
    let room_number = io.ask_id("\tEnter room number: ", "room number", None)?;

    if session.db().hotels().get_room(hotel_id, room_number).await?.is_none() {
        return Err(CoreError::RoomNotFound {
            hotel_id,
            room_number,
        }
        .into());
    }

    let repairs = session.db().repairs();
    io.say("Maintenance companies:")?;
    for company in repairs.companies().await? {
        let certified = if company.is_certified { "" } else { " (not certified)" };
        io.say(format_args!("\t{}. {}{}", company.company_id, company.name, certified))?;
    }

    let company_id = io.ask_id("\tEnter companyID: ", "companyID", None)?;
    let repair_date = io.ask("\tEnter repair date (YYYY-MM-DD): ", |s| {
        parse_date("repair date", s)
    })?;

    let request = RepairRequest {
        company_id,
        hotel_id,
        room_number,
        repair_date,
    };
    let repair = repairs.place(&request).await?;

    io.say(format_args!(
        "Room Repair Request Successfully Sent! (repairID = {})",
        repair.repair_id
    ))
}

/// Every repair request filed for a hotel.
pub async fn view_repair_history<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let hotel_id = io.ask_id("\tEnter hotelID: ", "hotelID", None)?;

    let rows = session.db().repairs().history_for_hotel(hotel_id).await?;

    write_rows(io.output(), session.format(), &rows)?;
    write_status(
        io.output(),
        session.format(),
        &format!("Repair requests: {}", rows.len()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{output, prompter, session};
    use crate::config::OutputFormat;
    use crate::error::ErrorCode;

    #[tokio::test]
    async fn test_place_and_view_repairs() {
        let mut session = session(OutputFormat::Tsv).await;

        let mut io = prompter("1\n102\n1\n2024-07-15\n");
        place_repair_request(&mut session, &mut io).await.unwrap();
        let text = output(io);
        assert!(text.contains("Maintenance companies:\n\t1. FixIt Co\n"));
        assert!(text.contains("Successfully Sent! (repairID = 1)"));

        let mut io = prompter("1\n");
        view_repair_history(&mut session, &mut io).await.unwrap();
        let text = output(io);
        assert!(text.contains("repairID\tcompanyID\thotelID\troomNumber\trepairDate\n"));
        assert!(text.contains("1\t1\t1\t102\t2024-07-15\n"));
        assert!(text.contains("Repair requests: 1"));

        let mut io = prompter("2\n");
        view_repair_history(&mut session, &mut io).await.unwrap();
        assert!(output(io).contains("Repair requests: 0"));
    }

    #[tokio::test]
    async fn test_repair_for_unknown_room() {
        let mut session = session(OutputFormat::Tsv).await;

        let mut io = prompter("2\n101\n");
        let err = place_repair_request(&mut session, &mut io).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(!output(io).contains("Maintenance companies"));
    }

    #[tokio::test]
    async fn test_repair_with_unknown_company() {
        let mut session = session(OutputFormat::Tsv).await;

        let mut io = prompter("1\n101\n42\n2024-07-15\n");
        let err = place_repair_request(&mut session, &mut io).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(session.db().repairs().history_for_hotel(1).await.unwrap().is_empty());
    }
}
