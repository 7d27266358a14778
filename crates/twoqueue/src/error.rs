//! Error types for twoqueue

use std::fmt;
use std::num::ParseIntError;

/// Result type alias for twoqueue operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a cache configuration
///
/// Cache operations themselves never fail; a missing key is `None`.
#[derive(Debug)]
pub enum Error {
    /// Capacity description has the wrong shape
    Parse(String),

    /// Capacity is not an integer
    InvalidNumber(ParseIntError),

    /// Capacity below zero
    NegativeCapacity {
        /// Which capacity was rejected
        tier: &'static str,
        /// The rejected value
        value: i64,
    },

    /// Capacity does not fit in `usize` on this platform
    CapacityTooLarge {
        /// Which capacity was rejected
        tier: &'static str,
        /// The rejected value
        value: i64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::InvalidNumber(e) => write!(f, "Invalid capacity: {}", e),
            Error::NegativeCapacity { tier, value } => {
                write!(f, "Negative {} capacity: {}", tier, value)
            }
            Error::CapacityTooLarge { tier, value } => {
                write!(f, "{} capacity too large: {}", tier, value)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidNumber(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Self {
        Error::InvalidNumber(err)
    }
}
