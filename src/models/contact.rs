//! Contact record stored under a name in the address book.

use crate::domain::Birthday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in the address book.
///
/// The contact name is the key in [`ContactBook`](super::ContactBook) and is
/// not repeated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    /// The phone number, stored verbatim (last write wins)
    pub phone: String,

    /// Date of birth, absent until explicitly set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with a phone number and no birthday.
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            birthday: None,
        }
    }

    /// Builder-style helper to attach a birthday.
    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "phone: {}", self.phone)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
