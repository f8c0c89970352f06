//! # Account Commands
//!
//! Sign-up, login and logout.

use std::io::{BufRead, Write};

use crate::error::CliError;
use crate::session::Session;
use crate::shell::Prompter;
use hotel_core::validation::{validate_password, validate_user_name};
use hotel_core::CoreError;

/// Creates a customer account and reports its generated userID.
pub async fn create_user<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let name = io.ask("\tEnter name: ", validate_user_name)?;
    let password = io.ask("\tEnter password: ", validate_password)?;

    let user = session.db().users().create(&name, &password).await?;
    io.say(format_args!("User successfully created with userID = {}", user.user_id))
}

/// Checks credentials and, on success, opens the user menu.
pub async fn log_in<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let user_id = io.ask_id("\tEnter userID: ", "userID", None)?;
    let password = io.prompt("\tEnter password: ")?;

    match session.db().users().authenticate(user_id, &password).await? {
        Some(user_id) => {
            session.log_in(user_id);
            io.say(format_args!("Logged in as user {}", user_id))
        }
        None => Err(CoreError::InvalidCredentials.into()),
    }
}

/// Returns to the main menu.
pub fn log_out<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    if let Some(user_id) = session.log_out() {
        io.say(format_args!("User {} logged out", user_id))?;
    }
    Ok(())
}
