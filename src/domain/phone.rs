//! Phone field.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};

/// Required number of digits in a phone number.
pub const PHONE_LEN: usize = 10;

/// Rule for phone numbers.
///
/// # Validation Rules
///
/// - Exactly 10 characters
/// - Every character is an ASCII digit (no `+`, spaces or separators)
#[derive(Debug, Clone, Copy)]
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    type Value = String;
    const LABEL: &'static str = "Phone";

    fn validate(raw: &str) -> Result<String, ValidationError> {
        // ASCII digits are one byte each, so the byte length check is exact
        if raw.len() != PHONE_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }
        Ok(raw.to_string())
    }

    fn render(value: &String) -> String {
        value.clone()
    }

    fn to_raw(value: &String) -> String {
        value.clone()
    }
}

/// A validated ten-digit phone number.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(Phone::new("+380501234567").is_err());
/// ```
pub type Phone = Field<PhoneRule>;

impl Phone {
    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.value()
    }
}
