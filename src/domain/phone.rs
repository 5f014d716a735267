//! PhoneNumber value object and the two phone validators.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Characters allowed by the loose validator: an optional leading '+',
/// then digits, whitespace, hyphens and parentheses.
static LOOSE_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9\s\-()]+$").expect("Failed to compile loose phone regex")
});

/// Required length for strictly validated phone numbers.
pub const STRICT_PHONE_LEN: usize = 10;

/// Minimum length for loosely validated phone numbers.
pub const LOOSE_PHONE_MIN_LEN: usize = 10;

/// Which acceptance rule a phone number is checked against.
///
/// The two rules disagree (`"123-456-7890"` is loose-valid but not
/// strict-valid), so every call site names the one it wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneValidation {
    /// Exactly ten characters, any content.
    Strict,
    /// Phone-like character set and at least ten characters.
    Loose,
}

impl PhoneValidation {
    /// Check a candidate against this rule.
    pub fn accepts(self, candidate: &str) -> bool {
        match self {
            Self::Strict => validate_strict(candidate),
            Self::Loose => validate_loose(candidate),
        }
    }
}

/// Strict rule: the candidate is exactly ten characters long.
pub fn validate_strict(candidate: &str) -> bool {
    candidate.chars().count() == STRICT_PHONE_LEN
}

/// Loose rule: the candidate matches `^\+?[0-9\s\-()]+$` and is at least
/// ten characters long.
pub fn validate_loose(candidate: &str) -> bool {
    LOOSE_PHONE_REGEX.is_match(candidate) && candidate.chars().count() >= LOOSE_PHONE_MIN_LEN
}

/// A phone number stored on a record.
///
/// The stored value is exactly the accepted input, without normalization.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
///
/// assert!(PhoneNumber::new("123-456-7890").is_err());
/// assert!(PhoneNumber::parse_loose("123-456-7890").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a PhoneNumber using the strict validator.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` unless the value is
    /// exactly ten characters.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_validation(phone, PhoneValidation::Strict)
    }

    /// Create a PhoneNumber using the loose validator, as the interactive
    /// add and change flows do.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if the value has
    /// characters outside the phone set or is shorter than ten characters.
    pub fn parse_loose(phone: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_validation(phone, PhoneValidation::Loose)
    }

    /// Create a PhoneNumber checked against an explicit rule.
    pub fn with_validation(
        phone: impl Into<String>,
        validation: PhoneValidation,
    ) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !validation.accepts(&phone) {
            return Err(ValidationError::InvalidPhoneFormat(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Deserialization goes through the strict constructor
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
