//! Error types for the crosspath library.
//!
//! Path parsing, joining, and tokenizing are total and never fail. The
//! errors here cover the surrounding concerns: configuration, platform and
//! log-level names supplied as text, serialization, and I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a crosspath error.
///
/// # Examples
///
/// ```
/// use crosspath::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("/c/one")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the crosspath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A platform name could not be recognized.
    #[error("invalid platform '{value}': expected posix or windows")]
    InvalidPlatform {
        /// The unrecognized platform name.
        value: String,
    },

    /// A log level name could not be recognized.
    #[error("invalid log level '{value}': expected quiet, normal, or verbose")]
    InvalidLogLevel {
        /// The unrecognized log level name.
        value: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be read.
    #[error("cannot read configuration file {}: {reason}", path.display())]
    ConfigFile {
        /// The configuration file path.
        path: PathBuf,
        /// The reason the file could not be read.
        reason: String,
    },

    /// A configuration document could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A rendering could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error came from configuration handling.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspath::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "display_name".to_string(),
    ///     message: "must not be empty".to_string(),
    /// };
    /// assert!(err.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::ConfigFile { .. }
                | Self::Configuration(_)
                | Self::InvalidPlatform { .. }
                | Self::InvalidLogLevel { .. }
        )
    }
}
