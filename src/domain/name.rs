//! Name field.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};

/// Maximum number of characters in a name.
pub const MAX_NAME_LEN: usize = 30;

/// Rule for contact names.
///
/// # Validation Rules
///
/// - Between 1 and 30 characters (counted as `char`s, not bytes)
/// - Letters only: no digits, whitespace or punctuation
/// - Unicode letters are accepted
#[derive(Debug, Clone, Copy)]
pub struct NameRule;

impl FieldRule for NameRule {
    type Value = String;
    const LABEL: &'static str = "Name";

    fn validate(raw: &str) -> Result<String, ValidationError> {
        let len = raw.chars().count();
        if !(1..=MAX_NAME_LEN).contains(&len) || !raw.chars().all(char::is_alphabetic) {
            return Err(ValidationError::InvalidName(raw.to_string()));
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

/// A validated contact name.
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let name = Name::new("Alice").unwrap();
/// assert_eq!(name.value(), "Alice");
/// assert_eq!(name.to_string(), "Name: Alice");
/// ```
pub type Name = Field<NameRule>;

impl Name {
    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.value()
    }
}
