//! Record model: one contact and its phone numbers.

use crate::domain::{validate_loose, ContactName, PhoneNumber};
use crate::error::{AddressBookError, AddressBookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact entry: a name and an ordered list of phone numbers.
///
/// Phones keep the order they were added in. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Name of the contact
    pub name: ContactName,

    /// Phone numbers in insertion order
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a record with an initial list of phones.
    pub fn new(name: ContactName, phones: Vec<PhoneNumber>) -> Self {
        Self { name, phones }
    }

    /// Create a record with no phones.
    pub fn with_name(name: ContactName) -> Self {
        Self::new(name, Vec::new())
    }

    /// Append a phone and return the updated list.
    pub fn add_phone(&mut self, phone: PhoneNumber) -> &[PhoneNumber] {
        self.phones.push(phone);
        &self.phones
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::PhoneNotFound` if the record has no such
    /// phone. The list is left unchanged in that case.
    pub fn remove_phone(&mut self, phone: &PhoneNumber) -> AddressBookResult<PhoneNumber> {
        let index = self.position_of(phone.as_str())?;
        Ok(self.phones.remove(index))
    }

    /// Find the first phone whose value equals `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::PhoneNotFound` if `old` is not on the record.
    pub fn edit_phone(&mut self, old: &PhoneNumber, new: PhoneNumber) -> AddressBookResult<()> {
        let index = self.position_of(old.as_str())?;
        self.phones[index] = new;
        Ok(())
    }

    /// Loose phone check used by the interactive add and change flows.
    pub fn is_valid_phone(candidate: &str) -> bool {
        validate_loose(candidate)
    }

    fn position_of(&self, phone: &str) -> AddressBookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| AddressBookError::PhoneNotFound(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "{} - {}", self.name, phones.join(", "))
    }
}
