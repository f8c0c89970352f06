//! # Shell Commands
//!
//! One handler per menu action, reached through a dispatch table.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (Command, Menu, dispatch)
//! ├── account.rs  ◄─── Create user, log in, log out
//! ├── hotel.rs    ◄─── Hotels near a point, rooms of a hotel
//! ├── booking.rs  ◄─── Book a room, booking reports
//! ├── manager.rs  ◄─── Room updates and their log
//! └── repair.rs   ◄─── Repair requests
//! ```
//!
//! ## Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu::User.lookup(3) ──► Command::BookRoom                             │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  dispatch(Command::BookRoom, &mut session, &mut prompter)               │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  booking::book_room(session, prompter)                                  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  Ok(Flow::Continue) / Err(CliError)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers take the session and a prompter, so each one can be driven
//! directly from a test with scripted input.

pub mod account;
pub mod booking;
pub mod hotel;
pub mod manager;
pub mod repair;

use std::io::{BufRead, Write};

use crate::error::CliError;
use crate::session::Session;
use crate::shell::Prompter;

/// Every action a menu can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CreateUser,
    LogIn,
    Exit,
    ViewHotels,
    ViewRooms,
    BookRoom,
    ViewRecentBookings,
    UpdateRoomInfo,
    ViewRecentUpdates,
    ViewBookingHistory,
    ViewRegularCustomers,
    PlaceRepairRequest,
    ViewRepairHistory,
    LogOut,
}

/// What the shell does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One numbered menu line.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub choice: u32,
    pub command: Command,
    pub label: &'static str,
}

const fn entry(choice: u32, command: Command, label: &'static str) -> MenuEntry {
    MenuEntry {
        choice,
        command,
        label,
    }
}

/// Shown while nobody is logged in.
pub const MAIN_MENU: &[MenuEntry] = &[
    entry(1, Command::CreateUser, "Create user"),
    entry(2, Command::LogIn, "Log in"),
    entry(9, Command::Exit, "< EXIT"),
];

/// Shown to a logged-in user.
pub const USER_MENU: &[MenuEntry] = &[
    entry(1, Command::ViewHotels, "View Hotels within 30 units"),
    entry(2, Command::ViewRooms, "View Rooms"),
    entry(3, Command::BookRoom, "Book a Room"),
    entry(4, Command::ViewRecentBookings, "View recent booking history"),
    entry(5, Command::UpdateRoomInfo, "Update Room Information"),
    entry(6, Command::ViewRecentUpdates, "View 5 recent Room Updates Info"),
    entry(7, Command::ViewBookingHistory, "View booking history of the hotel"),
    entry(8, Command::ViewRegularCustomers, "View 5 regular Customers"),
    entry(9, Command::PlaceRepairRequest, "Place room repair Request to a company"),
    entry(10, Command::ViewRepairHistory, "View room repair Requests history"),
    entry(20, Command::LogOut, "Log out"),
];

/// The two menus of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Main,
    User,
}

impl Menu {
    /// The menu matching the session's login state.
    pub fn for_session(session: &Session) -> Self {
        if session.is_logged_in() {
            Menu::User
        } else {
            Menu::Main
        }
    }

    pub fn entries(&self) -> &'static [MenuEntry] {
        match self {
            Menu::Main => MAIN_MENU,
            Menu::User => USER_MENU,
        }
    }

    /// Maps a typed number to its command.
    pub fn lookup(&self, choice: u32) -> Option<Command> {
        self.entries()
            .iter()
            .find(|e| e.choice == choice)
            .map(|e| e.command)
    }

    /// Prints the menu.
    pub fn print<R: BufRead, W: Write>(&self, io: &mut Prompter<R, W>) -> Result<(), CliError> {
        io.say("MAIN MENU")?;
        io.say("---------")?;
        for e in self.entries() {
            if e.command == Command::LogOut {
                io.say(".........................")?;
            }
            io.say(format_args!("{}. {}", e.choice, e.label))?;
        }
        Ok(())
    }
}

/// Runs one command.
pub async fn dispatch<R: BufRead, W: Write>(
    command: Command,
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> Result<Flow, CliError> {
    match command {
        Command::CreateUser => account::create_user(session, io).await?,
        Command::LogIn => account::log_in(session, io).await?,
        Command::LogOut => account::log_out(session, io)?,
        Command::Exit => return Ok(Flow::Exit),
        Command::ViewHotels => hotel::view_hotels(session, io).await?,
        Command::ViewRooms => hotel::view_rooms(session, io).await?,
        Command::BookRoom => booking::book_room(session, io).await?,
        Command::ViewRecentBookings => booking::view_recent_bookings(session, io).await?,
        Command::ViewBookingHistory => booking::view_booking_history(session, io).await?,
        Command::ViewRegularCustomers => booking::view_regular_customers(session, io).await?,
        Command::UpdateRoomInfo => manager::update_room_info(session, io).await?,
        Command::ViewRecentUpdates => manager::view_recent_updates(session, io).await?,
        Command::PlaceRepairRequest => repair::place_repair_request(session, io).await?,
        Command::ViewRepairHistory => repair::view_repair_history(session, io).await?,
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
pub(crate) mod testing {
    //! Helpers for driving handlers with scripted input.

    use std::io::Cursor;

    use crate::config::OutputFormat;
    use crate::session::Session;
    use crate::shell::Prompter;
    use hotel_core::{Hotel, MaintenanceCompany, Room, UserType};
    use hotel_db::{Database, DbConfig};

    pub type ScriptedPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    pub fn prompter(script: &str) -> ScriptedPrompter {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    pub fn output(io: ScriptedPrompter) -> String {
        String::from_utf8(io.into_output()).unwrap_or_default()
    }

    /// Session over an in-memory database holding:
    /// - user 1: customer "Alice" (pw "alice-pw")
    /// - user 2: manager "Morgan" (pw "manager-pw"), runs hotels 1 and 2
    /// - hotel 1 "Harbor View" at (10, 10) with rooms 101 (120) and 102 (150)
    /// - hotel 2 "Summit Lodge" at (80, 80) with room 201 (90)
    /// - maintenance company 1
    pub async fn session(format: OutputFormat) -> Session {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        db.users().create("Alice", "alice-pw").await.unwrap();
        db.users()
            .create_with_type("Morgan", "manager-pw", UserType::Manager)
            .await
            .unwrap();

        for (hotel_id, name, lat, lon) in [(1, "Harbor View", 10.0, 10.0), (2, "Summit Lodge", 80.0, 80.0)] {
            db.hotels()
                .insert(&Hotel {
                    hotel_id,
                    hotel_name: name.to_string(),
                    latitude: lat,
                    longitude: lon,
                    manager_user_id: 2,
                })
                .await
                .unwrap();
        }
        for (hotel_id, room_number, price) in [(1, 101, 120), (1, 102, 150), (2, 201, 90)] {
            db.hotels()
                .insert_room(&Room {
                    hotel_id,
                    room_number,
                    price,
                    image_url: None,
                })
                .await
                .unwrap();
        }
        db.repairs()
            .insert_company(&MaintenanceCompany {
                company_id: 1,
                name: "FixIt Co".to_string(),
                address: None,
                is_certified: true,
            })
            .await
            .unwrap();

        Session::new(db, format)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{output, prompter, session};
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_menu_lookup() {
        assert_eq!(Menu::Main.lookup(1), Some(Command::CreateUser));
        assert_eq!(Menu::Main.lookup(9), Some(Command::Exit));
        assert_eq!(Menu::Main.lookup(3), None);

        assert_eq!(Menu::User.lookup(9), Some(Command::PlaceRepairRequest));
        assert_eq!(Menu::User.lookup(20), Some(Command::LogOut));
        assert_eq!(Menu::User.lookup(11), None);
    }

    #[test]
    fn test_menu_choices_are_unique() {
        for menu in [Menu::Main, Menu::User] {
            let mut choices: Vec<u32> = menu.entries().iter().map(|e| e.choice).collect();
            let total = choices.len();
            choices.dedup();
            assert_eq!(choices.len(), total);
        }
    }

    #[tokio::test]
    async fn test_menu_follows_login_state() {
        let mut session = session(OutputFormat::Tsv).await;
        assert_eq!(Menu::for_session(&session), Menu::Main);
        session.log_in(1);
        assert_eq!(Menu::for_session(&session), Menu::User);
    }

    #[tokio::test]
    async fn test_dispatch_exit() {
        let mut session = session(OutputFormat::Tsv).await;
        let mut io = prompter("");
        let flow = dispatch(Command::Exit, &mut session, &mut io).await.unwrap();
        assert_eq!(flow, Flow::Exit);
        assert!(output(io).is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_runs_handler() {
        let mut session = session(OutputFormat::Tsv).await;
        let mut io = prompter("1\n");
        let flow = dispatch(Command::ViewRooms, &mut session, &mut io).await.unwrap();
        assert_eq!(flow, Flow::Continue);
        assert!(output(io).contains("Harbor View\t101\t120\tnull"));
    }
}
