//! Demonstration records.
//!
//! Nothing here runs unless called. The binary loads it only when
//! `ADDRESS_BOOK_SEED_DEMO` is set.

use crate::book::AddressBook;
use crate::domain::{ContactName, PhoneNumber};
use crate::error::AddressBookResult;
use crate::models::Record;

const DEMO_CONTACTS: &[(&str, &[&str])] = &[
    ("John", &["1234567890", "1111111111", "1111111112", "1111111113"]),
    ("Ann", &["1234567890", "1111111114", "1111111115", "1111111116"]),
    ("Johny", &["1234567895", "1111111117", "1111111118", "1111111119"]),
];

/// Build an address book holding the demonstration contacts.
pub fn demo_book() -> AddressBookResult<AddressBook> {
    let mut book = AddressBook::new();

    for (name, phones) in DEMO_CONTACTS {
        let mut record = Record::with_name(ContactName::new(*name)?);
        for phone in *phones {
            record.add_phone(PhoneNumber::new(*phone)?);
        }
        book.add_record(record)?;
    }

    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_book_contents() {
        let book = demo_book().unwrap();
        assert_eq!(book.len(), 3);
        assert_eq!(
            book.find_record("John").unwrap().to_string(),
            "John - 1234567890, 1111111111, 1111111112, 1111111113"
        );
    }

    #[test]
    fn test_demo_shared_phone_resolves_to_first_by_name() {
        let book = demo_book().unwrap();
        let phone = PhoneNumber::new("1234567890").unwrap();
        // John and Ann share this number; lookup walks names in order
        assert_eq!(book.find_record_by_phone(&phone).unwrap().name.as_str(), "Ann");
    }
}
