//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when working with records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A value object failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is not on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// A record with this name already exists
    #[error("A record named {0} already exists")]
    DuplicateName(String),

    /// No record with this name exists
    #[error("Record not found: {0}")]
    RecordNotFound(String),
}

/// Errors that can end an interactive session.
///
/// Bad input from the user is never an error; it is answered with a message
/// and the flow retries or does nothing.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading a prompt answer or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An address book operation was called with arguments it rejects
    #[error(transparent)]
    Book(#[from] AddressBookError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
