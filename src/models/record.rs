//! Record model representing one contact.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Custom deserializer for phones that rejects repeated numbers
fn deserialize_phones<'de, D>(deserializer: D) -> Result<Vec<Phone>, D::Error>
where
    D: Deserializer<'de>,
{
    let phones: Vec<Phone> = Vec::deserialize(deserializer)?;
    for (i, phone) in phones.iter().enumerate() {
        if phones[..i].contains(phone) {
            return Err(serde::de::Error::custom(BookError::DuplicatePhone(
                phone.as_str().to_string(),
            )));
        }
    }
    Ok(phones)
}

/// A contact: one name, any number of distinct phones, an optional birthday.
///
/// The name is the record's identity in an
/// [`AddressBook`](crate::book::AddressBook) and cannot be changed after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_phones"
    )]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the name or birthday is invalid.
    pub fn new(name: &str, birthday: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: birthday.map(Birthday::new).transpose()?,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or replace the birthday. On error the previous birthday is kept.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Add a phone number.
    ///
    /// Returns `Ok(false)` without changing anything if the number is already
    /// present.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is malformed.
    pub fn add_phone(&mut self, number: &str) -> Result<bool, ValidationError> {
        let phone = Phone::new(number)?;
        if self.phones.contains(&phone) {
            tracing::trace!(name = %self.name.as_str(), phone = number, "Phone already present");
            return Ok(false);
        }
        self.phones.push(phone);
        Ok(true)
    }

    /// Find a phone by its number.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    fn phone_position(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == number)
    }

    /// Replace `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old` is not present
    /// - `BookError::Validation` if `new` is malformed
    /// - `BookError::DuplicatePhone` if `new` is already another entry
    ///
    /// The record is unchanged on any error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .phone_position(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;

        let phone = Phone::new(new)?;
        if old != new && self.find_phone(new).is_some() {
            return Err(BookError::DuplicatePhone(new.to_string()));
        }

        tracing::debug!(name = %self.name.as_str(), old, new, "Editing phone");
        self.phones[index] = phone;
        Ok(())
    }

    /// Remove a phone and return it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if the number is not present.
    pub fn remove_phone(&mut self, number: &str) -> BookResult<Phone> {
        let index = self
            .phone_position(number)
            .ok_or_else(|| BookError::PhoneNotFound(number.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Days until the next birthday counted from the local date, or `None`
    /// if no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday, or `None` if no birthday
    /// is set or the next occurrence is past chrono's date range.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().and_then(|b| b.days_to_birthday(today))
    }
}

// Display support
//
// The birthday segment follows the phones directly, with no separator.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name.as_str(),
            phones.join("; ")
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, "{}", birthday)?;
        }
        Ok(())
    }
}
