//! Address Book - an in-memory contact manager driven by console prompts.
//!
//! A contact is a [`Record`]: a name plus an ordered list of phone numbers.
//! The [`AddressBook`] holds records keyed by name and offers a pure
//! query/command API. The [`Session`] reads answers from any line source
//! and turns them into calls on that API.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (contact names, phone numbers)
//! - **models**: The record type
//! - **book**: The address book collection
//! - **session**: Interactive prompt flows
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **demo**: Demonstration records, loaded only on request

pub mod book;
pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{ContactName, PhoneNumber, PhoneValidation, ValidationError};
pub use error::{AddressBookError, ConfigError, SessionError};
pub use models::Record;
pub use session::{ActionOutcome, FindOutcome, Session};
