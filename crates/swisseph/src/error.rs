//! Error types for swisseph

use thiserror::Error;

/// Result type for swisseph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using swisseph
#[derive(Error, Debug)]
pub enum Error {
    /// The native library returned a negative status flag
    ///
    /// `code` is the flag exactly as returned and `message` is the contents of
    /// the library's diagnostic buffer, unmodified.
    #[error("Swiss Ephemeris error {code}: {message}")]
    Native { code: i32, message: String },

    /// `swe_date_conversion` rejected the calendar date
    #[error("Invalid date: {year:04}-{month:02}-{day:02} ({calendar} calendar)")]
    InvalidDate {
        year: i32,
        month: i32,
        day: i32,
        calendar: char,
    },

    /// An argument could not be marshaled into the native representation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration value missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create an Error from a native flag and its diagnostic text
    pub(crate) fn native(code: i32, message: impl Into<String>) -> Self {
        Error::Native {
            code,
            message: message.into(),
        }
    }

    /// The native status flag, if this error came from the library
    pub fn code(&self) -> Option<i32> {
        match self {
            Error::Native { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// The native diagnostic text, if this error came from the library
    pub fn native_message(&self) -> Option<&str> {
        match self {
            Error::Native { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_error_keeps_code_and_message() {
        let err = Error::native(-1, "illegal planet number 99.");
        assert_eq!(err.code(), Some(-1));
        assert_eq!(err.native_message(), Some("illegal planet number 99."));
        assert_eq!(
            err.to_string(),
            "Swiss Ephemeris error -1: illegal planet number 99."
        );
    }

    #[test]
    fn test_invalid_date_display() {
        let err = Error::InvalidDate {
            year: 2023,
            month: 2,
            day: 30,
            calendar: 'g',
        };
        assert_eq!(err.to_string(), "Invalid date: 2023-02-30 (g calendar)");
        assert_eq!(err.code(), None);
    }
}
