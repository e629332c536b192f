//! Error types and Result aliases for MSBuild analysis settings.
//!
//! All public functions return `Result<T, Error>` or `Result<T>`.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing, empty or otherwise unusable.
    #[error("invalid argument '{param}': {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        param: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The log file could not be opened, read or decoded.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No log file format is registered under the given name.
    #[error("unknown log file format '{0}'")]
    UnknownFormat(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON output error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid-argument error for the named parameter.
    pub fn invalid_argument(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this is an [`Error::InvalidArgument`].
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Whether this is an [`Error::Io`].
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests;
