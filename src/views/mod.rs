//! Rendering of assistant output.
//!
//! The session talks to a [`View`] only, so the plain console renderer can be
//! swapped for the JSON-lines renderer (or a test double) without touching
//! the dispatch logic.

mod console;
mod json;

pub use console::ConsoleView;
pub use json::JsonView;

use crate::models::{ContactBook, ContactRecord};
use std::io;

/// First line of the help text.
pub const HELP_HEADER: &str = "You can:";

/// Command usage and description pairs listed by `help`.
pub const HELP_COMMANDS: [(&str, &str); 8] = [
    ("add <name> <phone>", "add a contact or replace its phone number"),
    ("close/exit", "save the address book and quit"),
    ("change <name> <phone>", "change the phone number of an existing contact"),
    ("phone <name>", "show the phone number of a contact"),
    ("all", "show every saved contact"),
    ("add-birthday <name> <YYYY-MM-DD>", "set the date of birth of a contact"),
    ("show-birthday <name>", "show the date of birth of a contact"),
    ("birthdays", "show upcoming birthdays"),
];

/// Output capability required by the assistant.
pub trait View {
    /// Render a single contact.
    fn show_contact(&mut self, name: &str, record: &ContactRecord) -> io::Result<()>;

    /// Render a free-form message.
    fn show_message(&mut self, message: &str) -> io::Result<()>;

    /// Render the command reference.
    fn show_help(&mut self) -> io::Result<()>;

    /// Render the whole book.
    fn show_all_contacts(&mut self, book: &ContactBook) -> io::Result<()>;
}
