//! Contact operations.
//!
//! Every operation takes the raw argument list from the command line and the
//! book, and returns a message for the user. Missing arguments and unknown
//! names are reported in the message; nothing here returns an error.

mod birthday_service;
mod contact_service;

pub use birthday_service::{
    due_birthdays, upcoming_birthdays, BirthdayMatch, BirthdayWindow, UpcomingBirthday,
    DEFAULT_WINDOW_DAYS,
};
pub use contact_service::{
    add_birthday, add_contact, change_contact, show_birthday, show_phone, BIRTHDAY_ADDED,
    BIRTHDAY_NOT_FOUND, CONTACT_ADDED, CONTACT_NOT_FOUND, CONTACT_UPDATED, INVALID_BIRTHDAY,
    NEED_NAME, NEED_NAME_AND_BIRTHDAY, NEED_NAME_AND_PHONE,
};
