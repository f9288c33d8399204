//! Configuration management for the address book assistant.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use crate::services::{BirthdayMatch, BirthdayWindow, DEFAULT_WINDOW_DAYS};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Default location of the persisted book.
pub const DEFAULT_BOOK_FILE: &str = "addressbook.json";

/// Largest accepted birthday look-ahead, in days.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Renderer used for standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text lines
    #[default]
    Text,

    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Must be 'text' or 'json', got: {}", other)),
        }
    }
}

/// Configuration for the address book assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted book (default: "addressbook.json")
    pub book_file: PathBuf,

    /// Days ahead searched by `birthdays` (default: 7)
    pub birthday_window_days: u32,

    /// How stored birthdays are compared (default: literal)
    pub birthday_match: BirthdayMatch,

    /// Output renderer (default: text)
    pub output: OutputFormat,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: Path of the book file (default: addressbook.json)
    /// - `BIRTHDAY_WINDOW_DAYS`: Birthday look-ahead in days, 0-366 (default: 7)
    /// - `BIRTHDAY_MATCH_MODE`: `literal` or `anniversary` (default: literal)
    /// - `ADDRESS_BOOK_OUTPUT`: `text` or `json` (default: text)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() does not print to stdout, which stays reserved for the conversation
        let _ = dotenvy::dotenv();

        let book_file = env::var("ADDRESS_BOOK_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOK_FILE));

        if book_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let birthday_window_days = Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let birthday_match = Self::parse_env_with("BIRTHDAY_MATCH_MODE", BirthdayMatch::default())?;
        let output = Self::parse_env_with("ADDRESS_BOOK_OUTPUT", OutputFormat::default())?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_file,
            birthday_window_days,
            birthday_match,
            output,
            log_level,
        })
    }

    /// The birthday scan settings as one value.
    pub fn birthday_window(&self) -> BirthdayWindow {
        BirthdayWindow {
            days: self.birthday_window_days,
            mode: self.birthday_match,
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable through `FromStr` with a default value.
    fn parse_env_with<T>(var_name: &str, default: T) -> ConfigResult<T>
    where
        T: FromStr<Err = String>,
    {
        match env::var(var_name) {
            Ok(val) => val.parse::<T>().map_err(|reason| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason,
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_file: PathBuf::from(DEFAULT_BOOK_FILE),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            birthday_match: BirthdayMatch::Literal,
            output: OutputFormat::Text,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 5] = [
        "ADDRESS_BOOK_FILE",
        "BIRTHDAY_WINDOW_DAYS",
        "BIRTHDAY_MATCH_MODE",
        "ADDRESS_BOOK_OUTPUT",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        /// Start from a clean slate for every variable the config reads.
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.book_file, PathBuf::from("addressbook.json"));
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.birthday_match, BirthdayMatch::Literal);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.birthday_window(), BirthdayWindow::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_FILE", "/tmp/contacts.json");
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("BIRTHDAY_MATCH_MODE", "anniversary");
        guard.set("ADDRESS_BOOK_OUTPUT", "JSON");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_file, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.birthday_window_days, 14);
        assert_eq!(config.birthday_match, BirthdayMatch::Anniversary);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    #[serial]
    fn test_config_window_too_large() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "400");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BIRTHDAY_WINDOW_DAYS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_match_mode() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_MATCH_MODE", "fuzzy");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, reason }) => {
                assert_eq!(var, "BIRTHDAY_MATCH_MODE");
                assert!(reason.contains("fuzzy"));
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_book_file() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_FILE", "");

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    #[serial]
    fn test_parse_env_u32() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32", "42");

        assert_eq!(Config::parse_env_u32("TEST_U32", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u32("NONEXISTENT", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u32_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32_INVALID", "not-a-number");

        assert!(Config::parse_env_u32("TEST_U32_INVALID", 10).is_err());
    }
}
