//! Command dispatch for the assistant.

use crate::command::{parse_input, Command};
use crate::error::SessionResult;
use crate::models::ContactBook;
use crate::repositories::ContactBookRepository;
use crate::services::{
    add_birthday, add_contact, change_contact, show_birthday, show_phone, upcoming_birthdays,
    BirthdayWindow,
};
use crate::views::View;
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use tracing::{debug, error, info, warn};

pub const WELCOME: &str =
    "Welcome to the assistant bot! Type 'help' to learn about all the commands.";
pub const MENU_HINT: &str =
    "help/close/exit/add/change/phone/all/add-birthday/show-birthday/birthdays";
pub const PROMPT: &str = "Enter a command: ";
pub const HELLO: &str = "How can I help you? Please enter 'add' your name and number.";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Please enter 'help' to see available commands.";
pub const FAREWELL: &str = "Good bye!";

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// The assistant: owns the book, where it is stored, and how output is shown.
pub struct Assistant<R: ContactBookRepository, V: View> {
    repository: R,
    view: V,
    book: ContactBook,
    window: BirthdayWindow,
    state: SessionState,
}

impl<R: ContactBookRepository, V: View> Assistant<R, V> {
    /// Load the book from `repository` and greet the user.
    ///
    /// # Errors
    /// Fails if the stored book cannot be read (a missing file is not an error).
    pub fn start(repository: R, mut view: V, window: BirthdayWindow) -> SessionResult<Self> {
        let book = repository.load()?;
        info!(count = book.len(), "Address book loaded");

        view.show_message(WELCOME)?;

        Ok(Self {
            repository,
            view,
            book,
            window,
            state: SessionState::Running,
        })
    }

    /// The in-memory book.
    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    /// The storage backend.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Consume the assistant and return its renderer.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Parse and execute one line of input.
    ///
    /// `today` anchors the `birthdays` scan. Once terminated, further lines
    /// are ignored.
    pub fn handle_line(&mut self, line: &str, today: NaiveDate) -> SessionResult<SessionState> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }

        let parsed = parse_input(line);
        let command = parsed
            .command
            .as_deref()
            .and_then(|token| token.parse::<Command>().ok());

        let Some(command) = command else {
            debug!(token = ?parsed.command, "Unknown command");
            self.view.show_message(UNKNOWN_COMMAND)?;
            return Ok(self.state);
        };

        debug!(command = %command, args = parsed.args.len(), "Dispatching command");
        let args = parsed.args.as_slice();

        match command {
            Command::Exit => return self.shutdown(),
            Command::Hello => self.view.show_message(HELLO)?,
            Command::Help => self.view.show_help()?,
            Command::Add => {
                let message = add_contact(args, &mut self.book);
                self.view.show_message(&message)?;
            }
            Command::Change => {
                let message = change_contact(args, &mut self.book);
                self.view.show_message(&message)?;
            }
            Command::Phone => {
                let message = show_phone(args, &self.book);
                self.view.show_message(&message)?;
            }
            Command::All => self.view.show_all_contacts(&self.book)?,
            Command::AddBirthday => {
                let message = add_birthday(args, &mut self.book);
                self.view.show_message(&message)?;
            }
            Command::ShowBirthday => {
                let message = show_birthday(args, &self.book);
                self.view.show_message(&message)?;
            }
            Command::Birthdays => {
                let message = upcoming_birthdays(&self.book, today, &self.window);
                self.view.show_message(&message)?;
            }
        }

        Ok(self.state)
    }

    /// Save the book, say goodbye and terminate.
    pub fn shutdown(&mut self) -> SessionResult<SessionState> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }

        self.repository.save(&self.book)?;
        info!(count = self.book.len(), "Address book saved");
        self.state = SessionState::Terminated;

        self.view.show_message(FAREWELL)?;
        Ok(self.state)
    }

    /// Prompt, read and dispatch lines until the session terminates.
    ///
    /// End of input behaves like `exit`. If reading or rendering fails, the
    /// book is still saved before the error is returned.
    pub fn run<I: BufRead, P: Write>(&mut self, mut input: I, mut prompt: P) -> SessionResult<()> {
        let result = self.read_loop(&mut input, &mut prompt);

        if let Err(e) = &result {
            if self.state == SessionState::Running {
                warn!(error = %e, "Session aborted, saving address book");
                match self.repository.save(&self.book) {
                    Ok(()) => info!(count = self.book.len(), "Address book saved"),
                    Err(save_err) => error!(error = %save_err, "Failed to save address book"),
                }
                self.state = SessionState::Terminated;
            }
        }

        result
    }

    fn read_loop<I: BufRead, P: Write>(&mut self, input: &mut I, prompt: &mut P) -> SessionResult<()> {
        let mut buf = Vec::new();

        while self.state == SessionState::Running {
            self.view.show_message(MENU_HINT)?;
            write!(prompt, "{}", PROMPT)?;
            prompt.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("End of input, closing session");
                self.shutdown()?;
                break;
            }

            // Undecodable bytes become U+FFFD instead of ending the session.
            let line = String::from_utf8_lossy(&buf);
            let today = Local::now().date_naive();
            self.handle_line(&line, today)?;
        }

        Ok(())
    }
}
