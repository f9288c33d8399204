//! Error types for the address book assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Contact operations never fail; only storage, configuration and terminal I/O do.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or saving the contact book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the book file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The book file exists but could not be parsed
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record in the book file violates the book's invariants
    #[error("Invalid record in {}: {reason}", .path.display())]
    InvalidRecord { path: PathBuf, reason: String },

    /// The book could not be serialized
    #[error("Failed to serialize contact book: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The book file was written by an unknown format version
    #[error("Unsupported contact book format version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Persisting or restoring the book failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Reading input or rendering output failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::UnsupportedVersion(9);
        assert_eq!(err.to_string(), "Unsupported contact book format version: 9");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be a number"
        );
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = StorageError::Io {
            path: PathBuf::from("/tmp/book.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/book.json"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_session_error_wraps_storage() {
        let err: SessionError = StorageError::UnsupportedVersion(2).into();
        assert_eq!(err.to_string(), "Unsupported contact book format version: 2");
    }
}
