//! The in-memory address book.

use super::contact::ContactRecord;
use crate::domain::{Birthday, ValidationError};
use std::collections::BTreeMap;

/// Mapping from contact name to record.
///
/// Names are unique and non-empty. Iteration is in name order so that every
/// renderer prints the book deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: BTreeMap<String, ContactRecord>,
}

impl ContactBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the book has no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Whether a contact with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> Option<&ContactRecord> {
        self.contacts.get(name)
    }

    /// Look up a record by name for in-place mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.contacts.get_mut(name)
    }

    /// Insert or replace a whole record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty or blank.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        record: ContactRecord,
    ) -> Result<Option<ContactRecord>, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(self.contacts.insert(name, record))
    }

    /// Set the phone for `name`, creating the record if needed.
    ///
    /// An existing birthday is preserved. Returns `true` when the contact
    /// already existed.
    pub fn upsert_phone(&mut self, name: &str, phone: &str) -> Result<bool, ValidationError> {
        if let Some(record) = self.contacts.get_mut(name) {
            record.phone = phone.to_string();
            return Ok(true);
        }
        self.insert(name, ContactRecord::new(phone))?;
        Ok(false)
    }

    /// Set the birthday of an existing contact. Returns `false` if the name is unknown.
    pub fn set_birthday(&mut self, name: &str, birthday: Birthday) -> bool {
        match self.contacts.get_mut(name) {
            Some(record) => {
                record.birthday = Some(birthday);
                true
            }
            None => false,
        }
    }

    /// Iterate over `(name, record)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContactRecord)> {
        self.contacts.iter().map(|(name, record)| (name.as_str(), record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_phone_creates_then_overwrites() {
        let mut book = ContactBook::new();
        assert!(!book.upsert_phone("Ann", "111").unwrap());
        assert!(book.upsert_phone("Ann", "222").unwrap());
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Ann").unwrap().phone, "222");
    }

    #[test]
    fn test_upsert_phone_preserves_birthday() {
        let mut book = ContactBook::new();
        book.upsert_phone("Ann", "111").unwrap();
        assert!(book.set_birthday("Ann", Birthday::parse("1990-05-01").unwrap()));

        book.upsert_phone("Ann", "222").unwrap();
        let record = book.get("Ann").unwrap();
        assert_eq!(record.phone, "222");
        assert_eq!(record.birthday.unwrap().to_string(), "1990-05-01");
    }

    #[test]
    fn test_insert_rejects_empty_name() {
        let mut book = ContactBook::new();
        assert_eq!(
            book.insert("  ", ContactRecord::new("111")),
            Err(ValidationError::EmptyName)
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_set_birthday_unknown_name() {
        let mut book = ContactBook::new();
        assert!(!book.set_birthday("Ghost", Birthday::parse("1990-05-01").unwrap()));
        assert!(book.is_empty());
    }

    #[test]
    fn test_iter_is_name_ordered() {
        let mut book = ContactBook::new();
        book.upsert_phone("Zoe", "3").unwrap();
        book.upsert_phone("Ann", "1").unwrap();
        book.upsert_phone("Max", "2").unwrap();

        let names: Vec<&str> = book.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Ann", "Max", "Zoe"]);
    }
}
