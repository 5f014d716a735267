//! Shared builders for address book tests.

use address_book::{AddressBook, ContactName, PhoneNumber, Record, Session};
use std::io::Cursor;

/// Build a record from a name and strictly valid phones.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    Record::new(
        ContactName::new(name).expect("valid test name"),
        phones
            .iter()
            .map(|p| PhoneNumber::new(*p).expect("valid test phone"))
            .collect(),
    )
}

/// A strictly valid phone.
#[allow(dead_code)]
pub fn phone(value: &str) -> PhoneNumber {
    PhoneNumber::new(value).expect("valid test phone")
}

/// Book with John, Ann and Johny, each with disjoint phones.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", &["1234567890", "1111111111"]))
        .unwrap();
    book.add_record(sample_record("Ann", &["1111111114", "1111111115"]))
        .unwrap();
    book.add_record(sample_record("Johny", &["1234567895"]))
        .unwrap();
    book
}

/// Run `f` against a session fed with `input`, returning its result and
/// everything the session printed.
#[allow(dead_code)]
pub fn with_session<T>(
    book: &mut AddressBook,
    input: &str,
    f: impl FnOnce(&mut Session<'_, Cursor<Vec<u8>>, &mut Vec<u8>>) -> T,
) -> (T, String) {
    let mut output = Vec::new();
    let result = {
        let mut session = Session::new(book, Cursor::new(input.as_bytes().to_vec()), &mut output);
        f(&mut session)
    };
    (result, String::from_utf8(output).expect("utf-8 output"))
}
