use super::{View, HELP_COMMANDS, HELP_HEADER};
use crate::models::{ContactBook, ContactRecord};
use std::io::{self, Stdout, Write};

/// Shown by `all` when the book has no entries.
pub const NO_CONTACTS: &str = "No contacts saved.";

/// Plain-text renderer writing one line per item.
#[derive(Debug)]
pub struct ConsoleView<W: Write> {
    out: W,
}

impl ConsoleView<Stdout> {
    /// Renderer bound to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for ConsoleView<W> {
    fn show_contact(&mut self, name: &str, record: &ContactRecord) -> io::Result<()> {
        writeln!(self.out, "{}: {}", name, record)
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    fn show_help(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", HELP_HEADER)?;
        for (usage, description) in HELP_COMMANDS {
            writeln!(self.out, "{} - {}", usage, description)?;
        }
        Ok(())
    }

    fn show_all_contacts(&mut self, book: &ContactBook) -> io::Result<()> {
        if book.is_empty() {
            return self.show_message(NO_CONTACTS);
        }
        for (name, record) in book.iter() {
            self.show_contact(name, record)?;
        }
        Ok(())
    }
}
