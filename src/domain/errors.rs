//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty, too long, or contains non-letters.
    InvalidName(String),

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `YYYY.MM.DD` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(
                f,
                "Invalid name: {:?} (must be 1-30 letters)",
                name
            ),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: {:?} (must be exactly 10 digits)",
                phone
            ),
            Self::InvalidBirthday(birthday) => write!(
                f,
                "Invalid birthday: {:?} (expected YYYY.MM.DD)",
                birthday
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
