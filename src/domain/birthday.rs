//! Birthday field and countdown arithmetic.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted input shape. Calendar validity is checked separately by chrono.
static BIRTHDAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}\.\d{2}\.\d{2}$").expect("birthday pattern is valid"));

const INPUT_FORMAT: &str = "%Y.%m.%d";
const DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// Rule for birthdays.
///
/// # Validation Rules
///
/// - Input must be `YYYY.MM.DD`: four-digit year, zero-padded month and day
/// - The date must exist (`2023.02.29` is rejected, `2024.02.29` is accepted)
#[derive(Debug, Clone, Copy)]
pub struct BirthdayRule;

impl FieldRule for BirthdayRule {
    type Value = NaiveDate;
    const LABEL: &'static str = "Birthday";

    fn validate(raw: &str) -> Result<NaiveDate, ValidationError> {
        if !BIRTHDAY_PATTERN.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, INPUT_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    fn render(value: &NaiveDate) -> String {
        value.format(DISPLAY_FORMAT).to_string()
    }

    fn to_raw(value: &NaiveDate) -> String {
        value.format(INPUT_FORMAT).to_string()
    }
}

/// A validated birthday, stored as a calendar date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("1990.05.17").unwrap();
/// assert_eq!(birthday.to_string(), "Birthday: 1990-05-17");
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
/// assert_eq!(birthday.days_to_birthday(today), Some(7));
/// ```
pub type Birthday = Field<BirthdayRule>;

impl Birthday {
    /// Year of birth.
    pub fn year(&self) -> i32 {
        self.value().year()
    }

    /// Month of birth (1-12).
    pub fn month(&self) -> u32 {
        self.value().month()
    }

    /// Day of month (1-31).
    pub fn day(&self) -> u32 {
        self.value().day()
    }

    /// Date on which the birthday is celebrated in `year`.
    ///
    /// February 29 birthdays fall on February 28 in non-leap years. Returns
    /// `None` when `year` is outside chrono's supported range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// Number of days from `today` until the next birthday.
    ///
    /// Returns 0 when the birthday is `today`. Once this year's occurrence has
    /// passed, counts towards next year's. Returns `None` when that occurrence
    /// falls after the last date chrono can represent.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        let mut next = self.occurrence_in(today.year())?;
        if today > next {
            next = self.occurrence_in(today.year().checked_add(1)?)?;
        }
        Some((next - today).num_days())
    }
}
