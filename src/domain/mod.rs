//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names and phone numbers. Validation
//! happens at construction time, so an invalid value cannot be stored in
//! a record.

pub mod contact_name;
pub mod errors;
pub mod phone;

pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::{validate_loose, validate_strict, PhoneNumber, PhoneValidation};
