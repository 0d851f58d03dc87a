// src/error.rs

//! Unified error handling for school lookups.
//!
//! Both public operations swallow their internal errors and hand the caller a
//! default value instead. That policy lives in one place, [`Degrade`], so the
//! services never repeat their own catch-and-default logic.

use thiserror::Error;

/// Result type alias for school-meta operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed (timeout, connection, body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Regex pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Missing or unknown command-line input
    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Command-line input problems, the only errors reported to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Missing zip code")]
    MissingZipCode,

    #[error("Missing school name")]
    MissingSchoolName,

    #[error("Unknown command")]
    UnknownCommand,
}

impl ArgumentError {
    /// Process exit status for this error. An unknown command is reported
    /// but not treated as a failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingZipCode | Self::MissingSchoolName => 1,
            Self::UnknownCommand => 0,
        }
    }
}

/// Collapse any failure into a default value, logging what was swallowed.
pub trait Degrade<T> {
    /// Return the success value, or log the error under `context` and
    /// return `fallback()` instead.
    fn degrade(self, context: &str, fallback: impl FnOnce() -> T) -> T;
}

impl<T> Degrade<T> for Result<T> {
    fn degrade(self, context: &str, fallback: impl FnOnce() -> T) -> T {
        self.unwrap_or_else(|e| {
            log::warn!("{context} failed, using fallback: {e}");
            fallback()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrade_keeps_success_value() {
        let ok: Result<Vec<u8>> = Ok(vec![1, 2]);
        assert_eq!(ok.degrade("test", Vec::new), vec![1, 2]);
    }

    #[test]
    fn degrade_replaces_any_error() {
        let err: Result<Vec<u8>> = Err(AppError::config("boom"));
        assert!(err.degrade("test", Vec::new).is_empty());

        let err: Result<String> = Err(url::Url::parse("not a url").unwrap_err().into());
        assert_eq!(err.degrade("test", || "fallback".to_string()), "fallback");
    }

    #[test]
    fn argument_error_displays_bare_message() {
        let err = AppError::from(ArgumentError::UnknownCommand);
        assert_eq!(err.to_string(), "Unknown command");
        assert_eq!(ArgumentError::MissingZipCode.to_string(), "Missing zip code");
    }

    #[test]
    fn only_missing_arguments_fail_the_process() {
        assert_eq!(ArgumentError::MissingZipCode.exit_code(), 1);
        assert_eq!(ArgumentError::MissingSchoolName.exit_code(), 1);
        assert_eq!(ArgumentError::UnknownCommand.exit_code(), 0);
    }
}
