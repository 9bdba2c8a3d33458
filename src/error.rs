//! Library configuration errors.
//!
//! Failures of the containers themselves are values (`Maybe::None`,
//! `Either::Error`, `Try::Failure`). [`ConfigError`] covers the few places
//! where the library rejects its own configuration.

use std::error::Error;
use std::fmt;

/// Errors returned when library configuration is invalid.
///
/// # Examples
///
/// ```rust
/// use carrier::error::ConfigError;
///
/// let error = ConfigError::InvalidConcurrencyLimit;
/// assert_eq!(error.to_string(), "concurrency limit must be greater than 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigError {
    /// The concurrency limit for a concurrent traversal was set to zero.
    ///
    /// The limit must be at least 1.
    InvalidConcurrencyLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConcurrencyLimit => {
                write!(formatter, "concurrency limit must be greater than 0")
            }
        }
    }
}

impl Error for ConfigError {}
