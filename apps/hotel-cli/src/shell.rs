//! # Interactive Shell
//!
//! The menu loop and the line-oriented prompts it is built from.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Greeting                                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─► Menu::for_session ── logged out: MAIN MENU (1, 2, 9)              │
//! │  │        │               logged in:  user menu (1-10, 20)             │
//! │  │        ▼                                                             │
//! │  │   read choice ── not a number ──► "Your input is invalid!" ─┐        │
//! │  │        │                                                    │        │
//! │  │        ▼                                                    │        │
//! │  │   lookup ── unknown ──► "Unrecognized choice!" ─────────────┤        │
//! │  │        │                                                    │        │
//! │  │        ▼                                                    │        │
//! │  │   dispatch(Command) ── error ──► print message ─────────────┤        │
//! │  │        │                                                    │        │
//! │  └────────┴──── Flow::Continue ◄───────────────────────────────┘        │
//! │                                                                         │
//! │  Flow::Exit or end of input ──► return                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::{info, info_span, warn, Instrument};

use crate::commands::{dispatch, Flow, Menu};
use crate::error::CliError;
use crate::session::Session;
use hotel_core::validation::{parse_id, parse_menu_choice, ValidationResult};

// =============================================================================
// Prompter
// =============================================================================

/// Reads answers from an input stream and writes prompts to an output
/// stream. Generic so tests can script a whole conversation.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// The output stream, for rendering tables.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> Result<(), CliError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Prints `text` and reads one line, without the line terminator.
    ///
    /// Fails with [`ErrorCode::EndOfInput`](crate::error::ErrorCode::EndOfInput)
    /// once the input is exhausted.
    pub fn prompt(&mut self, text: &str) -> Result<String, CliError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::end_of_input());
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Prompts until `parse` accepts the answer.
    pub fn ask<T, F>(&mut self, text: &str, parse: F) -> Result<T, CliError>
    where
        F: Fn(&str) -> ValidationResult<T>,
    {
        loop {
            let line = self.prompt(text)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(format_args!("\t{}", e))?,
            }
        }
    }

    /// Prompts for an ID. A blank answer takes `default` when one is given.
    pub fn ask_id(&mut self, text: &str, field: &str, default: Option<i64>) -> Result<i64, CliError> {
        let text = match default {
            Some(id) => format!("{}[{}] ", text, id),
            None => text.to_string(),
        };
        self.ask(&text, |raw| match default {
            Some(id) if raw.trim().is_empty() => Ok(id),
            _ => parse_id(field, raw),
        })
    }

    /// Reads a menu choice, re-prompting on non-numeric input.
    pub fn read_choice(&mut self) -> Result<u32, CliError> {
        loop {
            let line = self.prompt("Please make your choice: ")?;
            match parse_menu_choice(&line) {
                Ok(choice) => return Ok(choice),
                Err(_) => self.say("Your input is invalid!")?,
            }
        }
    }

    /// Prints an operation failure.
    pub fn report(&mut self, err: &CliError) -> Result<(), CliError> {
        self.say(format_args!("Error: {}", err.message))
    }
}

// =============================================================================
// Menu Loop
// =============================================================================

/// Banner printed once at startup.
pub const GREETING: &str = concat!(
    "\n\n*******************************************************\n",
    "              User Interface                         \n",
    "*******************************************************\n",
);

/// Runs the menu loop until the user exits or input ends.
///
/// Operation failures are printed and the loop continues; only a closed or
/// broken terminal ends it early, and that is not treated as an error.
pub async fn run<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    io.say(GREETING)?;

    loop {
        let menu = Menu::for_session(session);
        menu.print(io)?;

        let choice = match io.read_choice() {
            Ok(choice) => choice,
            Err(e) if e.is_fatal() => break,
            Err(e) => return Err(e),
        };

        let Some(command) = menu.lookup(choice) else {
            io.say("Unrecognized choice!")?;
            continue;
        };

        let span = info_span!("command", session = %session.id(), command = ?command);
        match dispatch(command, session, io).instrument(span).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) if e.is_fatal() => {
                info!(code = ?e.code, "Input closed, leaving shell");
                break;
            }
            Err(e) => {
                warn!(command = ?command, code = ?e.code, "Command failed: {}", e.message);
                io.report(&e)?;
            }
        }
    }

    Ok(())
}
