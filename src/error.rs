//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record has no such phone number
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// The record already holds this phone number
    #[error("Phone already exists: {0}")]
    DuplicatePhone(String),

    /// The address book has no record under this name
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Batch iteration was requested with a zero batch size
    #[error("Batch size must be greater than zero")]
    InvalidBatchSize,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
