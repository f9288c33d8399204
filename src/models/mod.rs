//! Data models for the address book.
//!
//! This module contains the contact record and the book that maps names to records.

pub mod book;
pub mod contact;

pub use book::ContactBook;
pub use contact::ContactRecord;
