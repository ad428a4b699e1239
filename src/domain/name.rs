//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// This ensures that names are validated at construction time. Names may
/// contain only alphabetic characters and whitespace, so "John Doe" is
/// accepted while "John2" or "J. Doe" is rejected.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactName;
///
/// let name = ContactName::new("John Doe").unwrap();
/// assert_eq!(name.as_str(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Every character must be alphabetic or whitespace
    /// - Alphabetic means Unicode alphabetic, so "Олена" is valid
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name contains any
    /// other character.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    /// Replace the stored name, re-validating first.
    ///
    /// On failure the current value is left unchanged.
    pub fn set(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(name)?;
        Ok(())
    }

    /// Validate name format.
    fn is_valid(name: &str) -> bool {
        name.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
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

// Serde support - serialize as string
impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
