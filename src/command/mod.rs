//! Command-line parsing for the interactive loop.
//!
//! A line is split into a lower-cased command token and its arguments, and
//! the token is then matched against the known command vocabulary.

pub mod parser;

pub use parser::{parse_input, ParsedInput};

use std::fmt;
use std::str::FromStr;

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `close` or `exit`: save and quit
    Exit,
    Hello,
    Help,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
}

impl Command {
    /// Canonical token for the command.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Exit => "exit",
            Command::Hello => "hello",
            Command::Help => "help",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
        }
    }
}

/// Error returned when a token names no known command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown command: {}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Tokens are matched exactly; [`parse_input`] has already lower-cased them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "close" | "exit" => Ok(Command::Exit),
            "hello" => Ok(Command::Hello),
            "help" => Ok(Command::Help),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
