//! The address book: the collection of records.

mod address_book;

pub use address_book::AddressBook;
