//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// The name that identifies a contact in the address book.
///
/// Names are stored verbatim. The only rule is that a name must contain
/// something other than whitespace.
///
/// # Example
///
/// ```
/// use address_book::domain::ContactName;
///
/// let name = ContactName::new("John").unwrap();
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty or only
    /// whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Lets a BTreeMap<ContactName, _> be queried with a plain &str.
impl Borrow<str> for ContactName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_name_valid() {
        let name = ContactName::new("John").unwrap();
        assert_eq!(name.as_str(), "John");
    }

    #[test]
    fn test_contact_name_rejects_empty() {
        assert_eq!(ContactName::new(""), Err(ValidationError::EmptyName));
        assert_eq!(ContactName::new("   "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_contact_name_kept_verbatim() {
        let name = ContactName::new(" Ann Lee ").unwrap();
        assert_eq!(name.into_inner(), " Ann Lee ");
    }

    #[test]
    fn test_contact_name_borrow_as_str() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(ContactName::new("Ann").unwrap(), 1);
        assert_eq!(map.get("Ann"), Some(&1));
    }

    #[test]
    fn test_contact_name_serialization() {
        let name = ContactName::new("John").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"John\"");

        let result: Result<ContactName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
