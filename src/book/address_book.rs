//! In-memory collection of records keyed by contact name.

use crate::domain::{ContactName, PhoneNumber};
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Record;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

/// All records of a single user, keyed by name.
///
/// Names are unique: adding a record whose name is taken is rejected.
/// Iteration and rendering follow name order; nothing relies on the order
/// records were added in.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: BTreeMap<ContactName, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::DuplicateName` if a record with the same
    /// name exists. The existing record is not modified.
    pub fn add_record(&mut self, record: Record) -> AddressBookResult<()> {
        if self.records.contains_key(record.name.as_str()) {
            return Err(AddressBookError::DuplicateName(
                record.name.as_str().to_string(),
            ));
        }

        info!(name = %record.name, phones = record.phones.len(), "Record added");
        self.records.insert(record.name.clone(), record);
        Ok(())
    }

    /// Look up a record by exact name.
    pub fn find_record(&self, name: &str) -> Option<&Record> {
        let found = self.records.get(name);
        debug!(name = name, found = found.is_some(), "Find record by name");
        found
    }

    /// Look up a record by exact name for modification.
    pub fn find_record_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Return the first record holding a phone equal to `phone`.
    pub fn find_record_by_phone(&self, phone: &PhoneNumber) -> Option<&Record> {
        let found = self
            .records
            .values()
            .find(|record| record.phones.contains(phone));
        debug!(phone = %phone, found = found.is_some(), "Find record by phone");
        found
    }

    /// Remove a record by name, returning it if it existed.
    pub fn delete_record(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            info!(name = name, "Record deleted");
        }
        removed
    }

    /// Iterate over records in name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "No records found.");
        }

        let lines: Vec<String> = self.records().map(Record::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
