//! Validated, insertion-ordered contact table.

use super::clock::{is_before, Clock, SystemClock};
use crate::domain::contact_name::title_case;
use crate::domain::{ContactName, EmailAddress, PhoneNumber};
use crate::error::{ContactError, ContactResult, StorageError, StorageResult};
use crate::models::contact::provided;
use crate::models::{
    ContactField, ContactRecord, ContactUpdate, DeleteOutcome, NewContact, Statistics,
    UpdateOutcome, DEFAULT_GROUP,
};
use crate::repositories::{ContactEntry, ContactRepository};
use tracing::{debug, info};

/// The contact book.
///
/// Names are unique after normalization and entries keep the order in which they
/// were added. Every mutating operation validates its input before touching state.
pub struct ContactStore {
    entries: Vec<ContactEntry>,
    clock: Box<dyn Clock>,
}

impl ContactStore {
    /// Create an empty store using the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an empty store with a custom time source.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            entries: Vec::new(),
            clock: Box::new(clock),
        }
    }

    /// Build a store from previously persisted entries.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DuplicateKey` if two entries share a name.
    pub fn from_entries(
        entries: Vec<ContactEntry>,
        clock: impl Clock + 'static,
    ) -> StorageResult<Self> {
        let mut store = Self::with_clock(clock);
        for (name, record) in entries {
            if store.position(&name).is_some() {
                return Err(StorageError::DuplicateKey(name.into_inner()));
            }
            store.entries.push((name, record));
        }
        Ok(store)
    }

    /// Load the store from a repository.
    pub fn load(
        repository: &dyn ContactRepository,
        clock: impl Clock + 'static,
    ) -> StorageResult<Self> {
        let store = Self::from_entries(repository.load()?, clock)?;
        info!(count = store.len(), "Contacts loaded");
        Ok(store)
    }

    /// Write every entry to the repository. The in-memory state is never changed.
    pub fn persist(&self, repository: &dyn ContactRepository) -> StorageResult<()> {
        repository.save(&self.entries)?;
        info!(count = self.len(), "Contacts saved");
        Ok(())
    }

    /// Add a new contact.
    ///
    /// Checks run in order: name, uniqueness, phone, email. The first failure is
    /// returned and the store is left unchanged.
    pub fn add(&mut self, request: NewContact) -> ContactResult<(ContactName, ContactRecord)> {
        let name = ContactName::new(&request.name)?;

        if self.position(&name).is_some() {
            debug!(name = %name, "Rejected duplicate contact");
            return Err(ContactError::DuplicateContact(name.into_inner()));
        }

        let phone = PhoneNumber::parse(request.phone.trim())?;

        let email = match provided(&request.email) {
            Some(raw) => Some(EmailAddress::new(raw)?),
            None => None,
        };

        let address = provided(&request.address).map(str::to_string);

        let group = provided(&request.group)
            .map(title_case)
            .unwrap_or_else(|| DEFAULT_GROUP.to_string());

        let now = self.clock.now();
        let record = ContactRecord {
            phone,
            email,
            address,
            group,
            created_at: now.clone(),
            updated_at: now,
        };

        info!(name = %name, group = %record.group, "Contact added");
        self.entries.push((name.clone(), record.clone()));
        Ok((name, record))
    }

    /// Find contacts whose name contains `term` (ignoring case) or whose phone
    /// digits contain it. Results keep insertion order.
    pub fn search(&self, term: &str) -> Vec<(&ContactName, &ContactRecord)> {
        let needle = term.to_lowercase();
        let results: Vec<_> = self
            .iter()
            .filter(|(name, record)| {
                name.as_str().to_lowercase().contains(&needle)
                    || record.phone.as_str().contains(&needle)
            })
            .collect();

        debug!(term = %term, matches = results.len(), "Search completed");
        results
    }

    /// Apply the supplied fields to an existing contact.
    ///
    /// Invalid phone or email values are skipped and reported in
    /// [`UpdateOutcome::rejected`]; the rest of the update still applies.
    /// `updated_at` is refreshed whenever the contact exists.
    pub fn update(&mut self, name: &str, changes: ContactUpdate) -> ContactResult<UpdateOutcome> {
        let index = self.require(name)?;
        let now = self.clock.now();
        let (key, record) = &mut self.entries[index];
        let mut rejected = Vec::new();

        if let Some(raw) = provided(&changes.phone) {
            match PhoneNumber::parse(raw) {
                Ok(phone) => record.phone = phone,
                Err(_) => rejected.push(ContactField::Phone),
            }
        }

        if let Some(raw) = provided(&changes.email) {
            match EmailAddress::new(raw) {
                Ok(email) => record.email = Some(email),
                Err(_) => rejected.push(ContactField::Email),
            }
        }

        if let Some(address) = provided(&changes.address) {
            record.address = Some(address.to_string());
        }

        if let Some(group) = provided(&changes.group) {
            record.group = group.to_string();
        }

        record.updated_at = if is_before(&now, &record.created_at) {
            record.created_at.clone()
        } else {
            now
        };

        info!(name = %key, rejected = rejected.len(), "Contact updated");
        Ok(UpdateOutcome {
            record: record.clone(),
            rejected,
        })
    }

    /// Remove a contact if `confirmed` is true.
    pub fn delete(&mut self, name: &str, confirmed: bool) -> ContactResult<DeleteOutcome> {
        let index = self.require(name)?;

        if !confirmed {
            debug!(name = %self.entries[index].0, "Deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let (key, record) = self.entries.remove(index);
        info!(name = %key, "Contact deleted");
        Ok(DeleteOutcome::Deleted(record))
    }

    /// Every contact in insertion order.
    pub fn list_all(&self) -> Vec<(&ContactName, &ContactRecord)> {
        self.iter().collect()
    }

    /// Total count and per-group counts.
    pub fn statistics(&self) -> Statistics {
        let mut by_group: Vec<(String, usize)> = Vec::new();

        for (_, record) in &self.entries {
            match by_group.iter_mut().find(|(group, _)| *group == record.group) {
                Some((_, count)) => *count += 1,
                None => by_group.push((record.group.clone(), 1)),
            }
        }

        Statistics {
            total: self.entries.len(),
            by_group,
        }
    }

    /// Look up a contact by (unnormalized) name.
    pub fn get(&self, name: &str) -> Option<&ContactRecord> {
        let name = ContactName::new(name).ok()?;
        self.position(&name).map(|index| &self.entries[index].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order, as persisted.
    pub fn entries(&self) -> &[ContactEntry] {
        &self.entries
    }

    fn iter(&self) -> impl Iterator<Item = (&ContactName, &ContactRecord)> {
        self.entries.iter().map(|(name, record)| (name, record))
    }

    fn position(&self, name: &ContactName) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }

    /// Index of an existing contact, or `ContactNotFound`.
    fn require(&self, name: &str) -> ContactResult<usize> {
        ContactName::new(name)
            .ok()
            .and_then(|key| self.position(&key))
            .ok_or_else(|| ContactError::ContactNotFound(name.trim().to_string()))
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ContactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactStore")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
