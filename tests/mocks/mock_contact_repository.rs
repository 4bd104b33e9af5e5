use contact_book::error::{StorageError, StorageResult};
use contact_book::repositories::{ContactEntry, ContactRepository};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// seeded with entries, made to fail on save, and tracks method calls.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    entries: Arc<Mutex<Vec<ContactEntry>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository already holding `entries`.
    pub fn with_entries(entries: Vec<ContactEntry>) -> Self {
        let repo = Self::new();
        *repo.entries.lock().unwrap() = entries;
        repo
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// The entries from the last successful save.
    pub fn saved(&self) -> Vec<ContactEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn load(&self) -> StorageResult<Vec<ContactEntry>> {
        self.track_call("load");
        Ok(self.entries.lock().unwrap().clone())
    }

    fn save(&self, entries: &[ContactEntry]) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: "mock".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }

        *self.entries.lock().unwrap() = entries.to_vec();
        Ok(())
    }
}
