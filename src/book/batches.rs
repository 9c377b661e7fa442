//! Batched iteration over an address book.

use crate::models::Record;
use std::fmt::Write;
use std::iter::FusedIterator;

/// Iterator yielding the book's entries in fixed-size batches.
///
/// Each item is the concatenation of up to `batch_size` `"<name>: <record>"`
/// renderings with nothing between them. The last batch may be shorter;
/// an empty batch is never produced. Created by
/// [`AddressBook::iterate`](super::AddressBook::iterate).
#[derive(Debug, Clone)]
pub struct Batches<'a> {
    entries: indexmap::map::Iter<'a, String, Record>,
    batch_size: usize,
}

impl<'a> Batches<'a> {
    pub(super) fn new(entries: indexmap::map::Iter<'a, String, Record>, batch_size: usize) -> Self {
        debug_assert!(batch_size > 0);
        Self {
            entries,
            batch_size,
        }
    }

    /// Pull the next batch. Same as `Iterator::next`.
    pub fn next_batch(&mut self) -> Option<String> {
        self.next()
    }
}

impl Iterator for Batches<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut batch = String::new();
        let mut count = 0;

        for (name, record) in self.entries.by_ref().take(self.batch_size) {
            // Writing to a String cannot fail
            let _ = write!(batch, "{}: {}", name, record);
            count += 1;
        }

        if count == 0 {
            return None;
        }
        tracing::trace!(count, remaining = self.entries.len(), "Yielding batch");
        Some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let batches = self.entries.len().div_ceil(self.batch_size);
        (batches, Some(batches))
    }
}

impl ExactSizeIterator for Batches<'_> {}

impl FusedIterator for Batches<'_> {}
