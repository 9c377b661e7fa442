//! Generic self-validating field.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Validation and rendering rules for one kind of field.
///
/// Implementors are zero-sized marker types; the value itself lives in
/// [`Field`].
pub trait FieldRule {
    /// The validated value type stored in the field.
    type Value;

    /// Label used by the `Display` impl (`"<LABEL>: <value>"`).
    const LABEL: &'static str;

    /// Parse and validate raw input.
    ///
    /// # Errors
    ///
    /// Returns the rule-specific `ValidationError` when the input is rejected.
    fn validate(raw: &str) -> Result<Self::Value, ValidationError>;

    /// Human-readable rendering of a validated value.
    fn render(value: &Self::Value) -> String;

    /// Convert a validated value back to the raw form accepted by `validate`.
    fn to_raw(value: &Self::Value) -> String;
}

/// A value that always satisfies the rule `R`.
///
/// Construction and every mutation run `R::validate`, so there is no way to
/// observe a `Field` holding an invalid value.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let mut phone = Phone::new("0501234567").unwrap();
/// assert!(phone.set_value("not-a-phone").is_err());
/// assert_eq!(phone.value(), "0501234567");
/// ```
pub struct Field<R: FieldRule> {
    value: R::Value,
    rule: PhantomData<R>,
}

impl<R: FieldRule> Field<R> {
    /// Create a new field, validating the raw input.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if `raw` does not satisfy the rule.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            value: R::validate(raw)?,
            rule: PhantomData,
        })
    }

    /// Get the validated value.
    pub fn value(&self) -> &R::Value {
        &self.value
    }

    /// Replace the value. On error the previous value is kept.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if `raw` does not satisfy the rule.
    pub fn set_value(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.value = R::validate(raw)?;
        Ok(())
    }

    /// Convert into the underlying value.
    pub fn into_inner(self) -> R::Value {
        self.value
    }
}

impl<R: FieldRule> Clone for Field<R>
where
    R::Value: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            rule: PhantomData,
        }
    }
}

impl<R: FieldRule> PartialEq for Field<R>
where
    R::Value: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: FieldRule> Eq for Field<R> where R::Value: Eq {}

impl<R: FieldRule> Hash for Field<R>
where
    R::Value: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<R: FieldRule> fmt::Debug for Field<R>
where
    R::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(R::LABEL).field(&self.value).finish()
    }
}

// Display support
impl<R: FieldRule> fmt::Display for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", R::LABEL, R::render(&self.value))
    }
}

// Serde support - serialize as the raw input form
impl<R: FieldRule> Serialize for Field<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&R::to_raw(&self.value))
    }
}

// Serde support - deserialize from string with validation
impl<'de, R: FieldRule> Deserialize<'de> for Field<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Field::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts only lowercase ASCII words.
    struct LowerRule;

    impl FieldRule for LowerRule {
        type Value = String;
        const LABEL: &'static str = "Lower";

        fn validate(raw: &str) -> Result<String, ValidationError> {
            if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_lowercase()) {
                Ok(raw.to_string())
            } else {
                Err(ValidationError::InvalidName(raw.to_string()))
            }
        }

        fn render(value: &String) -> String {
            value.to_uppercase()
        }

        fn to_raw(value: &String) -> String {
            value.clone()
        }
    }

    #[test]
    fn test_field_rejects_invalid_construction() {
        assert!(Field::<LowerRule>::new("Hello").is_err());
        assert!(Field::<LowerRule>::new("").is_err());
    }

    #[test]
    fn test_field_failed_update_keeps_value() {
        let mut field = Field::<LowerRule>::new("alpha").unwrap();
        let err = field.set_value("BETA").unwrap_err();
        assert_eq!(err, ValidationError::InvalidName("BETA".to_string()));
        assert_eq!(field.value(), "alpha");

        field.set_value("gamma").unwrap();
        assert_eq!(field.value(), "gamma");
    }

    #[test]
    fn test_field_display_uses_label_and_render() {
        let field = Field::<LowerRule>::new("abc").unwrap();
        assert_eq!(field.to_string(), "Lower: ABC");
        assert_eq!(format!("{:?}", field), "Lower(\"abc\")");
    }

    #[test]
    fn test_field_hashes_by_value() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        assert!(seen.insert(Field::<LowerRule>::new("abc").unwrap()));
        assert!(!seen.insert(Field::<LowerRule>::new("abc").unwrap()));
        assert!(seen.insert(Field::<LowerRule>::new("xyz").unwrap()));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_field_deserialization_validates() {
        let ok: Field<LowerRule> = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(ok.value(), "abc");

        let bad: Result<Field<LowerRule>, _> = serde_json::from_str("\"ABC\"");
        assert!(bad.is_err());
    }
}
