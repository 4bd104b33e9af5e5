//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The normalized name of a contact, used as the unique key of the store.
///
/// Normalization trims surrounding whitespace and title-cases the rest, so
/// `" alice  smith "` and `"ALICE  SMITH"` both become `"Alice  Smith"`.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactName;
///
/// let name = ContactName::new("  mary-jane o'neil ").unwrap();
/// assert_eq!(name.as_str(), "Mary-Jane O'Neil");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName from raw user input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the input is blank after trimming.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(title_case(trimmed)))
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

/// Title-case a string.
///
/// A letter is uppercased when the character before it is not a letter and
/// lowercased otherwise. Digits, apostrophes and hyphens all start a new word.
/// When uppercasing expands to several characters (`ß` -> `SS`) only the first
/// stays uppercase, so applying this twice gives the same result as once.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;

    for c in input.chars() {
        if !c.is_alphabetic() {
            out.push(c);
            prev_is_letter = false;
            continue;
        }

        let start = out.len();
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            let mut upper = c.to_uppercase();
            if let Some(first) = upper.next() {
                out.push(first);
            }
            out.extend(upper.flat_map(char::to_lowercase));
        }

        // Word state follows what was emitted, not the input char
        prev_is_letter = out[start..]
            .chars()
            .last()
            .map_or(false, char::is_alphabetic);
    }

    out
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
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

// Serde support - deserialize from string with normalization
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
    fn test_name_is_trimmed_and_title_cased() {
        let name = ContactName::new(" alice ").unwrap();
        assert_eq!(name.as_str(), "Alice");

        let name = ContactName::new("JOHN DOE").unwrap();
        assert_eq!(name.as_str(), "John Doe");
    }

    #[test]
    fn test_differently_cased_names_are_equal() {
        assert_eq!(
            ContactName::new("alice").unwrap(),
            ContactName::new("  ALICE").unwrap()
        );
    }

    #[test]
    fn test_name_rejects_blank() {
        assert_eq!(ContactName::new(""), Err(ValidationError::EmptyName));
        assert_eq!(ContactName::new("   \t"), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_title_case_word_boundaries() {
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("mary-jane"), "Mary-Jane");
        assert_eq!(title_case("agent007bond"), "Agent007Bond");
        assert_eq!(title_case("élodie DURAND"), "Élodie Durand");
    }

    #[test]
    fn test_multi_char_uppercase_keeps_one_capital() {
        assert_eq!(title_case("ßam"), "Ssam");
        assert_eq!(title_case("ßAM"), "Ssam");
        assert_eq!(
            ContactName::new("ßam").unwrap(),
            ContactName::new("ssam").unwrap()
        );
    }

    #[test]
    fn test_normalizing_twice_is_stable() {
        for raw in ["ßam", "ǆemal", "aİb", "straße strauß", "ﬁona", "o'neil-ßmith"] {
            let once = ContactName::new(raw).unwrap();
            let twice = ContactName::new(once.as_str()).unwrap();
            assert_eq!(once, twice, "input {:?}", raw);
        }
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let name = ContactName::new("ann  lee").unwrap();
        assert_eq!(name.as_str(), "Ann  Lee");
    }

    #[test]
    fn test_name_deserialization_normalizes() {
        let name: ContactName = serde_json::from_str("\"bob smith\"").unwrap();
        assert_eq!(name.as_str(), "Bob Smith");
    }

    #[test]
    fn test_name_deserialization_empty_fails() {
        let result: Result<ContactName, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
