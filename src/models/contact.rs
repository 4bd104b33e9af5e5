//! Contact record stored in the contact book.

use crate::domain::{EmailAddress, PhoneNumber};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Group assigned when none is supplied.
pub const DEFAULT_GROUP: &str = "Other";

/// Format of the `created_at` / `updated_at` timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Treat empty or whitespace-only input the same as a missing value.
pub(crate) fn provided(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Custom deserializer for the optional email: `null`, missing and `""` all mean no email.
fn deserialize_optional_email<'de, D>(deserializer: D) -> Result<Option<EmailAddress>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match provided(&raw) {
        Some(email) => EmailAddress::new(email)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Custom deserializer for optional free text: `null`, missing and `""` all mean no value.
fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(provided(&raw).map(str::to_string))
}

fn default_group() -> String {
    DEFAULT_GROUP.to_string()
}

/// One entry of the contact book.
///
/// Records are created by the store after validation, so the phone is always
/// canonical digits and the email, when present, always well-formed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    pub(crate) phone: PhoneNumber,

    #[serde(default, deserialize_with = "deserialize_optional_email")]
    pub(crate) email: Option<EmailAddress>,

    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub(crate) address: Option<String>,

    #[serde(default = "default_group")]
    pub(crate) group: String,

    /// When the contact was created (ISO 8601 timestamp)
    pub(crate) created_at: String,

    /// When the contact was last updated (ISO 8601 timestamp)
    pub(crate) updated_at: String,
}

impl ContactRecord {
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }
}

/// Raw input for adding a contact, exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub group: Option<String>,
}

impl NewContact {
    /// Create a request with the two required fields.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Requested changes to an existing contact.
///
/// Every field is optional. A field that is `None` or blank keeps its current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub group: Option<String>,
}

impl ContactUpdate {
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// A validated field of a contact record that an update can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Phone,
    Email,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Phone => "phone",
            Self::Email => "email",
        };
        write!(f, "{}", label)
    }
}

/// Result of a successful update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// The record after the update
    pub record: ContactRecord,

    /// Supplied fields that failed validation and were left unchanged
    pub rejected: Vec<ContactField>,
}

/// Result of a delete request on an existing contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The contact was removed; carries the removed record
    Deleted(ContactRecord),

    /// The deletion was not confirmed and nothing changed
    Cancelled,
}

/// Summary counts over the whole store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Number of contacts
    pub total: usize,

    /// Contacts per group, in the order each group is first seen
    pub by_group: Vec<(String, usize)>,
}

impl Statistics {
    /// Number of contacts in `group` (zero when the group is unknown).
    pub fn count_for(&self, group: &str) -> usize {
        self.by_group
            .iter()
            .find(|(name, _)| name == group)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}
