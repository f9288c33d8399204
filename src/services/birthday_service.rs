//! Upcoming-birthday scan.

use crate::models::ContactBook;
use chrono::{Duration, NaiveDate};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Default look-ahead for `birthdays`, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// How a stored birthday is compared against today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BirthdayMatch {
    /// Compare the stored date as-is, year included.
    #[default]
    Literal,

    /// Compare the next yearly anniversary of the stored month and day.
    Anniversary,
}

impl FromStr for BirthdayMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "literal" => Ok(BirthdayMatch::Literal),
            "anniversary" => Ok(BirthdayMatch::Anniversary),
            other => Err(format!(
                "Must be 'literal' or 'anniversary', got: {}",
                other
            )),
        }
    }
}

impl fmt::Display for BirthdayMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BirthdayMatch::Literal => f.write_str("literal"),
            BirthdayMatch::Anniversary => f.write_str("anniversary"),
        }
    }
}

/// Range of days searched by the upcoming-birthday scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    /// Days after today still counted as upcoming (inclusive)
    pub days: u32,

    /// Date comparison mode
    pub mode: BirthdayMatch,
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_WINDOW_DAYS,
            mode: BirthdayMatch::Literal,
        }
    }
}

/// A contact whose birthday falls inside the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The matched date: stored date in literal mode, next occurrence otherwise
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format("%Y-%m-%d"))
    }
}

/// Contacts with a birthday in `[today, today + window.days]`, ordered by date then name.
pub fn due_birthdays(
    book: &ContactBook,
    today: NaiveDate,
    window: &BirthdayWindow,
) -> Vec<UpcomingBirthday> {
    let last_day = today + Duration::days(i64::from(window.days));

    let mut due: Vec<UpcomingBirthday> = book
        .iter()
        .filter_map(|(name, record)| {
            let birthday = record.birthday?;
            let date = match window.mode {
                BirthdayMatch::Literal => birthday.date(),
                BirthdayMatch::Anniversary => birthday.next_anniversary(today),
            };
            (today <= date && date <= last_day).then(|| UpcomingBirthday {
                name: name.to_string(),
                date,
            })
        })
        .collect();

    // Book iteration is already name-ordered, so a stable sort keeps names tied by date ordered.
    due.sort_by_key(|entry| entry.date);
    due
}

/// `birthdays`: newline-joined `name: date` lines, or a note that none are due.
pub fn upcoming_birthdays(book: &ContactBook, today: NaiveDate, window: &BirthdayWindow) -> String {
    let due = due_birthdays(book, today, window);
    debug!(
        today = %today,
        days = window.days,
        mode = %window.mode,
        count = due.len(),
        "Birthday scan completed"
    );

    if due.is_empty() {
        return format!("No upcoming birthdays in the next {} days.", window.days);
    }

    due.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
