use crate::domain::ContactName;
use crate::error::StorageResult;
use crate::models::ContactRecord;

/// A stored contact: normalized name and its record.
pub type ContactEntry = (ContactName, ContactRecord);

/// Repository for persisting contacts between sessions.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (JSON file, in-memory mock).
pub trait ContactRepository {
    /// Read every persisted contact, in stored order.
    ///
    /// Returns an empty list when nothing has been saved yet.
    fn load(&self) -> StorageResult<Vec<ContactEntry>>;

    /// Replace the persisted contacts with `entries`.
    fn save(&self, entries: &[ContactEntry]) -> StorageResult<()>;
}
