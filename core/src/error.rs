//! Error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl Error {
    /// Whether this error was caused by caller input rather than the environment
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::UnknownRole(_) | Error::UnknownStatus(_))
    }
}
