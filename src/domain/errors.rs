//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name contains non-letter, non-space characters.
    InvalidName(String),

    /// The provided phone number is not exactly ten decimal digits.
    InvalidPhone(String),

    /// The provided birthday does not parse as a `YYYY-MM-DD` date.
    InvalidBirthday {
        /// The raw input that failed to parse.
        input: String,
        /// The underlying parse error text.
        reason: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "Invalid contact name: {}", name),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number format: {}", phone),
            Self::InvalidBirthday { input, reason } => {
                write!(f, "Wrong date format for '{}': {}", input, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
