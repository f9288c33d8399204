//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A type-safe wrapper for a contact's date of birth.
///
/// Only the exact `YYYY-MM-DD` shape is accepted, so the value renders back
/// to the same text it was parsed from.
///
/// # Example
///
/// ```
/// use address_book_bot::domain::Birthday;
///
/// let birthday = Birthday::parse("1990-05-01").unwrap();
/// assert_eq!(birthday.to_string(), "1990-05-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly ten characters: four-digit year, two-digit month, two-digit day
    /// - Fields separated by hyphens
    /// - Must name a real calendar date (no `2023-02-29`)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value is malformed.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !Self::has_iso_shape(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    fn has_iso_shape(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            })
    }

    /// The stored calendar date, year included.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The first anniversary of this birthday falling on or after `from`.
    ///
    /// February 29 birthdays are observed on February 28 in non-leap years.
    pub fn next_anniversary(&self, from: NaiveDate) -> NaiveDate {
        let this_year = self.anniversary_in(from.year());
        if this_year >= from {
            this_year
        } else {
            self.anniversary_in(from.year() + 1)
        }
    }

    fn anniversary_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serde support - serialize as string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
