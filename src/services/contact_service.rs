//! Add, change and look up contacts.

use crate::domain::Birthday;
use crate::models::ContactBook;
use tracing::{debug, warn};

pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const BIRTHDAY_ADDED: &str = "Birthday added.";
pub const CONTACT_NOT_FOUND: &str = "Contact not found";
pub const BIRTHDAY_NOT_FOUND: &str = "Birthday not found for this contact";
pub const NEED_NAME_AND_PHONE: &str = "Give me name and phone please.";
pub const NEED_NAME: &str = "Enter user name.";
pub const NEED_NAME_AND_BIRTHDAY: &str = "Give me name and birthday (YYYY-MM-DD) please.";
pub const INVALID_BIRTHDAY: &str = "Invalid date format. Use YYYY-MM-DD.";

/// Destructure exactly two arguments.
fn two_args(args: &[String]) -> Option<(&str, &str)> {
    match args {
        [first, second] => Some((first.as_str(), second.as_str())),
        _ => None,
    }
}

/// Destructure exactly one argument.
fn one_arg(args: &[String]) -> Option<&str> {
    match args {
        [only] => Some(only.as_str()),
        _ => None,
    }
}

/// `add <name> <phone>`: create the contact or overwrite its phone.
///
/// A birthday already set on the contact is kept.
pub fn add_contact(args: &[String], book: &mut ContactBook) -> String {
    let Some((name, phone)) = two_args(args) else {
        return NEED_NAME_AND_PHONE.to_string();
    };

    match book.upsert_phone(name, phone) {
        Ok(true) => {
            debug!(name = %name, "Contact phone overwritten");
            CONTACT_UPDATED.to_string()
        }
        Ok(false) => {
            debug!(name = %name, "Contact added");
            CONTACT_ADDED.to_string()
        }
        Err(e) => {
            warn!(error = %e, "Rejected contact");
            NEED_NAME_AND_PHONE.to_string()
        }
    }
}

/// `change <name> <phone>`: overwrite the phone of an existing contact.
pub fn change_contact(args: &[String], book: &mut ContactBook) -> String {
    let Some((name, phone)) = two_args(args) else {
        return NEED_NAME_AND_PHONE.to_string();
    };

    match book.get_mut(name) {
        Some(record) => {
            record.phone = phone.to_string();
            debug!(name = %name, "Contact phone changed");
            CONTACT_UPDATED.to_string()
        }
        None => CONTACT_NOT_FOUND.to_string(),
    }
}

/// `phone <name>`: the contact's phone as `name: phone`.
pub fn show_phone(args: &[String], book: &ContactBook) -> String {
    let Some(name) = one_arg(args) else {
        return NEED_NAME.to_string();
    };

    match book.get(name) {
        Some(record) => format!("{}: {}", name, record.phone),
        None => CONTACT_NOT_FOUND.to_string(),
    }
}

/// `add-birthday <name> <YYYY-MM-DD>`: set or replace a contact's birthday.
///
/// Malformed dates are rejected and leave the contact untouched.
pub fn add_birthday(args: &[String], book: &mut ContactBook) -> String {
    let Some((name, raw_date)) = two_args(args) else {
        return NEED_NAME_AND_BIRTHDAY.to_string();
    };

    if !book.contains(name) {
        return CONTACT_NOT_FOUND.to_string();
    }

    let birthday = match Birthday::parse(raw_date) {
        Ok(birthday) => birthday,
        Err(e) => {
            debug!(name = %name, error = %e, "Birthday rejected");
            return INVALID_BIRTHDAY.to_string();
        }
    };

    book.set_birthday(name, birthday);
    debug!(name = %name, birthday = %birthday, "Birthday set");
    BIRTHDAY_ADDED.to_string()
}

/// `show-birthday <name>`: the stored birthday text.
pub fn show_birthday(args: &[String], book: &ContactBook) -> String {
    let Some(name) = one_arg(args) else {
        return NEED_NAME.to_string();
    };

    book.get(name)
        .and_then(|record| record.birthday)
        .map(|birthday| birthday.to_string())
        .unwrap_or_else(|| BIRTHDAY_NOT_FOUND.to_string())
}
