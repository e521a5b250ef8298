//! # Console Commands

//! Each line the operator types is one UI event. This module turns a line into a `ConsoleCommand`;
//! free-text values (driver names, dock names) take the rest of the line, spaces included.

use std::str::FromStr;
use crate::errors::CheckInError;
use crate::models::FormField;
use crate::views::ActiveView;

pub const HELP: &str = "\
Commands:
  login <username> <password>      sign in
  logout                           sign out
  continue                         dismiss the inactivity prompt
  view checkin|dashboard|admin     switch screens
  set <field> <value>              fill a form field (driverName, trailerNumber, company,
                                   truckNumber, assignedDock, arrivalTime, phoneNumber, comments)
  submit                           complete the check-in
  reset                            clear the form
  checkout <id>                    check a driver out
  reassign <id> <dock>             move a driver to another dock
  maintenance <dock>               toggle a dock's maintenance mode
  clear-docks | clear-maintenance | clear-history | export
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Login { username: String, password: String },
    Logout,
    Continue,
    View(ActiveView),
    Set(FormField, String),
    Submit,
    ResetForm,
    CheckOut(u64),
    Reassign(u64, String),
    Maintenance(String),
    ClearDocks,
    ClearMaintenance,
    ClearHistory,
    Export,
    Help,
    Quit,
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (input, ""),
    }
}

fn parse_id(raw: &str, line: &str) -> Result<u64, CheckInError> {
    raw.parse::<u64>()
        .map_err(|_| CheckInError::UnknownCommand(line.to_string()))
}

impl FromStr for ConsoleCommand {
    type Err = CheckInError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = split_word(line);
        let unknown = || CheckInError::UnknownCommand(line.trim().to_string());
        match verb.to_ascii_lowercase().as_str() {
            "login" => {
                let (username, password) = split_word(rest);
                if username.is_empty() {
                    return Err(unknown());
                }
                Ok(ConsoleCommand::Login {
                    username: username.to_string(),
                    password: password.to_string(),
                })
            }
            "logout" => Ok(ConsoleCommand::Logout),
            "continue" => Ok(ConsoleCommand::Continue),
            "view" => Ok(ConsoleCommand::View(rest.parse()?)),
            "set" => {
                let (field, value) = split_word(rest);
                Ok(ConsoleCommand::Set(field.parse()?, value.to_string()))
            }
            "submit" => Ok(ConsoleCommand::Submit),
            "reset" => Ok(ConsoleCommand::ResetForm),
            "checkout" => Ok(ConsoleCommand::CheckOut(parse_id(rest, line)?)),
            "reassign" => {
                let (id, dock) = split_word(rest);
                Ok(ConsoleCommand::Reassign(parse_id(id, line)?, dock.to_string()))
            }
            "maintenance" if !rest.is_empty() => Ok(ConsoleCommand::Maintenance(rest.to_string())),
            "clear-docks" => Ok(ConsoleCommand::ClearDocks),
            "clear-maintenance" => Ok(ConsoleCommand::ClearMaintenance),
            "clear-history" => Ok(ConsoleCommand::ClearHistory),
            "export" => Ok(ConsoleCommand::Export),
            "help" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "exit" => Ok(ConsoleCommand::Quit),
            _ => Err(unknown()),
        }
    }
}
