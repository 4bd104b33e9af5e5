//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum number of digits in a valid phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Maximum number of digits in a valid phone number.
pub const MAX_PHONE_DIGITS: usize = 15;

/// A type-safe wrapper for phone numbers in canonical form.
///
/// The stored value contains digits only, between 10 and 15 of them.
/// Formatting characters are stripped on construction.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::parse("+1 (555) 123-4567").unwrap();
/// assert_eq!(phone.as_str(), "15551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse raw user input into a canonical phone number.
    ///
    /// # Validation Rules
    ///
    /// - Every non-digit character is discarded
    /// - The remaining digit count must be between 10 and 15 inclusive
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` with the raw input if the digit count is out of range.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        validate_phone(raw)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidPhone(raw.to_string()))
    }

    /// Get the phone digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Strip every non-digit from `raw` and accept the result if it has 10 to 15 digits.
///
/// Returns the digit string on success and `None` otherwise.
pub fn validate_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
        Some(digits)
    } else {
        None
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

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::parse(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
