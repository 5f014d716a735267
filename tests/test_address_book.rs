//! Tests for the pure record and address book API.
//!
//! Nothing here reads input; every call takes its arguments explicitly.

mod fixtures;

use address_book::{AddressBook, AddressBookError, PhoneNumber, Record, ValidationError};
use fixtures::{phone, sample_book, sample_record};

#[test]
fn test_strict_construction_by_length() {
    for len in [0usize, 1, 9, 11, 15] {
        let candidate = "7".repeat(len);
        assert_eq!(
            PhoneNumber::new(candidate.clone()),
            Err(ValidationError::InvalidPhoneFormat(candidate))
        );
    }

    let stored = PhoneNumber::new("12 34-5678").unwrap();
    assert_eq!(stored.as_str(), "12 34-5678");
}

#[test]
fn test_loose_validator_examples() {
    assert!(Record::is_valid_phone("123-456-7890"));
    assert!(Record::is_valid_phone("+380 (50) 123 45 67"));
    assert!(!Record::is_valid_phone("abc1234567"));
    assert!(!Record::is_valid_phone("123456789"));
    assert!(!Record::is_valid_phone("++1234567890"));
}

#[test]
fn test_add_phone_appends_as_last_element() {
    let mut record = sample_record("John", &["1111111111", "2222222222"]);
    let before = record.phones.len();

    record.add_phone(phone("3333333333"));

    assert_eq!(record.phones.len(), before + 1);
    assert_eq!(
        record.phones,
        vec![phone("1111111111"), phone("2222222222"), phone("3333333333")]
    );
}

#[test]
fn test_remove_absent_phone_is_phone_not_found() {
    let mut record = sample_record("John", &["1111111111", "2222222222"]);
    let before = record.phones.clone();

    let result = record.remove_phone(&phone("9999999999"));

    assert_eq!(
        result,
        Err(AddressBookError::PhoneNotFound("9999999999".to_string()))
    );
    assert_eq!(record.phones, before);
}

#[test]
fn test_record_rendering() {
    let record = sample_record("John", &["1234567890", "1111111111"]);
    assert_eq!(record.to_string(), "John - 1234567890, 1111111111");
}

#[test]
fn test_find_by_phone_never_crosses_records() {
    let book = sample_book();

    for (name, number) in [("John", "1111111111"), ("Ann", "1111111115"), ("Johny", "1234567895")] {
        let found = book.find_record_by_phone(&phone(number)).unwrap();
        assert_eq!(found.name.as_str(), name);
    }
    assert!(book.find_record_by_phone(&phone("0000000000")).is_none());
}

#[test]
fn test_delete_then_lookup_misses() {
    let mut book = sample_book();

    let removed = book.delete_record("Ann").unwrap();
    assert_eq!(removed.to_string(), "Ann - 1111111114, 1111111115");
    assert!(book.find_record("Ann").is_none());
    assert!(book.find_record_by_phone(&phone("1111111114")).is_none());
    assert_eq!(book.len(), 2);
}

#[test]
fn test_duplicate_name_keeps_original() {
    let mut book = sample_book();

    let result = book.add_record(sample_record("John", &["5555555555"]));

    assert!(matches!(result, Err(AddressBookError::DuplicateName(name)) if name == "John"));
    assert_eq!(
        book.find_record("John").unwrap().to_string(),
        "John - 1234567890, 1111111111"
    );
}

#[test]
fn test_find_record_mut_edits_in_place() {
    let mut book = sample_book();

    book.find_record_mut("John")
        .unwrap()
        .edit_phone(&phone("1234567890"), phone("5555555555"))
        .unwrap();

    assert_eq!(
        book.find_record("John").unwrap().to_string(),
        "John - 5555555555, 1111111111"
    );
    assert!(book.find_record_by_phone(&phone("1234567890")).is_none());
}

#[test]
fn test_book_rendering() {
    assert_eq!(AddressBook::new().to_string(), "No records found.");

    let rendered = sample_book().to_string();
    let mut lines: Vec<&str> = rendered.lines().collect();
    lines.sort_unstable();
    assert_eq!(
        lines,
        vec![
            "Ann - 1111111114, 1111111115",
            "John - 1234567890, 1111111111",
            "Johny - 1234567895",
        ]
    );
}
