//! Address Book Bot - an interactive command-line address book.
//!
//! Contacts (a name, a phone number and an optional birthday) are kept in
//! memory while the session runs, loaded from a JSON file at start and written
//! back at exit. The assistant also lists birthdays coming up within a
//! configurable number of days (a week by default).
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (birthday dates)
//! - **models**: The contact record and the contact book
//! - **repositories**: Whole-book persistence behind a trait, JSON file implementation
//! - **command**: Input line parsing and the command vocabulary
//! - **services**: Contact and birthday operations that always answer with a message
//! - **session**: The read-dispatch-render loop
//! - **views**: Console and JSON-lines renderers
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod session;
pub mod views;

// Re-export commonly used types
pub use command::{parse_input, Command, ParsedInput};
pub use config::{Config, OutputFormat};
pub use domain::{Birthday, ValidationError};
pub use error::{ConfigError, SessionError, StorageError};
pub use models::{ContactBook, ContactRecord};
pub use repositories::{ContactBookRepository, JsonFileRepository};
pub use services::{BirthdayMatch, BirthdayWindow, UpcomingBirthday};
pub use session::{run_session, Assistant, SessionState};
pub use views::{ConsoleView, JsonView, View};
