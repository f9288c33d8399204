//! Domain value objects and types.
//!
//! Type-safe wrappers that validate at construction time so an invalid
//! birthday can never be stored in a contact record.

pub mod birthday;
pub mod errors;

pub use birthday::Birthday;
pub use errors::ValidationError;
