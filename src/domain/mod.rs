//! Domain value objects and types.
//!
//! This module contains self-validating fields for contact names, phone
//! numbers and birthdays. Each field validates its input at construction and
//! on every update, so invalid data can never be represented in a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BirthdayRule};
pub use errors::ValidationError;
pub use field::{Field, FieldRule};
pub use name::{Name, NameRule};
pub use phone::{Phone, PhoneRule};
