//! Error types for the Dori geometry crate
//!
//! The geometry engine itself never fails. These errors come from the
//! caller-side helpers: parameter validation, index conversions and
//! field-of-view derivation.

use std::fmt;

/// Result type for Dori helper operations
pub type Result<T> = std::result::Result<T, Error>;

/// Dori geometry errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A numeric parameter is non-finite or outside its physical range
    InvalidParameter(String),

    /// An ordinal does not name an edge or a region
    InvalidIndex(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidIndex(msg) => write!(f, "Invalid index: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error before handing it back to the caller.
pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
    crate::dori_error!(source, "{}", error);
    error
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
