use super::{View, HELP_COMMANDS, HELP_HEADER};
use crate::models::{ContactBook, ContactRecord};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
struct ContactJson<'a> {
    name: &'a str,
    phone: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<String>,
}

impl<'a> ContactJson<'a> {
    fn new(name: &'a str, record: &'a ContactRecord) -> Self {
        Self {
            name,
            phone: &record.phone,
            birthday: record.birthday.map(|b| b.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct HelpEntryJson<'a> {
    usage: &'a str,
    description: &'a str,
}

/// One rendered line, tagged by `type`.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ViewEvent<'a> {
    Message {
        text: &'a str,
    },
    Contact {
        contact: ContactJson<'a>,
    },
    Help {
        header: &'a str,
        commands: Vec<HelpEntryJson<'a>>,
    },
    Contacts {
        contacts: Vec<ContactJson<'a>>,
    },
}

/// Structured renderer emitting one JSON object per line.
///
/// Useful for scripting the assistant and for asserting on output in tests.
#[derive(Debug)]
pub struct JsonView<W: Write> {
    out: W,
}

impl<W: Write> JsonView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &ViewEvent<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write> View for JsonView<W> {
    fn show_contact(&mut self, name: &str, record: &ContactRecord) -> io::Result<()> {
        self.emit(&ViewEvent::Contact {
            contact: ContactJson::new(name, record),
        })
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.emit(&ViewEvent::Message { text: message })
    }

    fn show_help(&mut self) -> io::Result<()> {
        let commands = HELP_COMMANDS
            .iter()
            .map(|&(usage, description)| HelpEntryJson { usage, description })
            .collect();
        self.emit(&ViewEvent::Help {
            header: HELP_HEADER,
            commands,
        })
    }

    fn show_all_contacts(&mut self, book: &ContactBook) -> io::Result<()> {
        let contacts = book
            .iter()
            .map(|(name, record)| ContactJson::new(name, record))
            .collect();
        self.emit(&ViewEvent::Contacts { contacts })
    }
}
