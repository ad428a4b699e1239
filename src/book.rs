//! The address book: an insertion-ordered collection of records keyed by
//! contact name.

use crate::models::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A keyed collection of contact records.
///
/// Records are indexed by their contact name and iterated in insertion
/// order. The key always equals the contained record's name: `add_record`
/// is the only insertion path and derives the key from the record.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("John Doe").unwrap());
/// assert!(book.find("John Doe").is_some());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its contact name.
    ///
    /// An existing record under the same name is silently replaced
    /// (last-write-wins); its position in the iteration order is kept.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        match self.records.insert(name.clone(), record) {
            Some(_) => debug!(name = %name, "replaced record"),
            None => debug!(name = %name, "added record"),
        }
    }

    /// Look up the record for `name`.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up the record for `name` for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record for `name`; no-op when absent.
    ///
    /// Removal preserves the insertion order of the remaining records.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            debug!(name = %name, "deleted record");
        }
        removed
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Iterate over the book in pages of up to `page_size` records.
    ///
    /// Pages cover all current records in insertion order; the final page
    /// may be shorter. The iterator borrows the book, so the book cannot
    /// be mutated while pages are being consumed. A `page_size` of zero
    /// yields no pages.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        Pages {
            records: self.records.values().collect(),
            page_size,
            offset: 0,
        }
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

/// Lazy page iterator over a snapshot of an address book's records.
///
/// Created by [`AddressBook::pages`]. Finite and consumed once; each item
/// is one page of record references.
#[derive(Debug)]
pub struct Pages<'a> {
    records: Vec<&'a Record>,
    page_size: usize,
    offset: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.page_size == 0 || self.offset >= self.records.len() {
            return None;
        }

        let end = usize::min(self.offset + self.page_size, self.records.len());
        let page = self.records[self.offset..end].to_vec();
        self.offset = end;
        Some(page)
    }
}
