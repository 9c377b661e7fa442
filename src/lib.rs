//! Contact Book - an in-memory address book with self-validating fields.
//!
//! Records hold a validated name, any number of ten-digit phone numbers and an
//! optional birthday. The address book keeps records in insertion order and
//! can page through them in fixed-size batches.
//!
//! # Architecture
//!
//! - **domain**: Self-validating fields (`Name`, `Phone`, `Birthday`)
//! - **models**: The `Record` aggregate
//! - **book**: `AddressBook` and its batch iterator
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Logging setup

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;

pub use book::{AddressBook, Batches};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
pub use observability::init_logging;
