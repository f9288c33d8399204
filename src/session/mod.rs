//! Interactive session for the address book assistant.
//!
//! This module provides the read-dispatch-render loop that owns the contact
//! book for the lifetime of the process.

pub mod assistant;

pub use assistant::{
    Assistant, SessionState, FAREWELL, HELLO, MENU_HINT, PROMPT, UNKNOWN_COMMAND, WELCOME,
};

use crate::error::SessionResult;
use crate::repositories::ContactBookRepository;
use crate::views::View;
use std::io::{BufRead, Write};

/// Run a session until the user exits or input ends.
///
/// The book is saved before this returns, whether the user typed `exit`
/// or the input ran out.
///
/// # Arguments
/// * `assistant` - A started assistant
/// * `input` - Source of command lines (stdin in the binary)
/// * `prompt` - Where the input prompt is written
pub fn run_session<R, V, I, P>(
    mut assistant: Assistant<R, V>,
    input: I,
    prompt: P,
) -> SessionResult<Assistant<R, V>>
where
    R: ContactBookRepository,
    V: View,
    I: BufRead,
    P: Write,
{
    assistant.run(input, prompt)?;
    Ok(assistant)
}
