//! The address book: records keyed by name, in insertion order.

use super::batches::Batches;
use crate::config::Config;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::fmt;

/// An insertion-ordered collection of records keyed by contact name.
///
/// At most one record is stored per name. Only the domain operations below
/// are exposed; the underlying map is never handed out mutably, so keys always
/// match `record.name()`.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut alice = Record::new("Alice", None).unwrap();
/// alice.add_phone("1234567890").unwrap();
/// book.add_record(alice);
///
/// assert!(book.find("Alice").is_some());
/// assert!(book.delete("Bob").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name.
    ///
    /// An existing record with the same name is replaced and returned. The
    /// replacement keeps the original entry's position.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let name = record.name().as_str().to_string();
        let previous = self.records.insert(name.clone(), record);
        if previous.is_some() {
            tracing::debug!(name = %name, "Replaced existing record");
        }
        previous
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for editing its phones or birthday.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record and return it.
    ///
    /// Remaining records keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if no record has this name.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .shift_remove(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
        tracing::debug!(name, "Deleted record");
        Ok(record)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.keys().map(String::as_str)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.values()
    }

    /// Iterate over the book in batches of `batch_size` entries.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidBatchSize` if `batch_size` is zero.
    pub fn iterate(&self, batch_size: usize) -> BookResult<Batches<'_>> {
        if batch_size == 0 {
            return Err(BookError::InvalidBatchSize);
        }
        Ok(Batches::new(self.records.iter(), batch_size))
    }

    /// Iterate using the configured batch size.
    pub fn iterate_with(&self, config: &Config) -> BookResult<Batches<'_>> {
        self.iterate(config.batch_size)
    }

    /// Records whose next birthday is at most `within_days` days after `today`.
    ///
    /// Records without a birthday are skipped. Insertion order is kept.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<&Record> {
        self.records
            .values()
            .filter(|r| {
                r.days_to_birthday_from(today)
                    .is_some_and(|days| days <= within_days)
            })
            .collect()
    }
}

// Display support
impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, record) in &self.records {
            writeln!(f, "{}: {}", name, record)?;
        }
        Ok(())
    }
}
