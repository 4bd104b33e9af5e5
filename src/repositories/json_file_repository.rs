use crate::domain::ContactName;
use crate::error::{StorageError, StorageResult};
use crate::models::ContactRecord;
use crate::repositories::traits::{ContactEntry, ContactRepository};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Contact repository backed by a JSON file plus a backup copy.
///
/// The file holds one JSON object mapping contact name to record. Every save
/// writes the primary file first and then an identical backup file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    data_path: PathBuf,
    backup_path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the given primary and backup paths.
    pub fn new(data_path: impl Into<PathBuf>, backup_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            backup_path: backup_path.into(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    /// Whether the primary file exists yet.
    pub fn has_data(&self) -> bool {
        self.data_path.exists()
    }

    fn encode(&self, entries: &[ContactEntry]) -> StorageResult<Vec<u8>> {
        let json_error = |source| StorageError::Json {
            path: self.data_path.clone(),
            source,
        };

        let mut map = Map::new();
        for (name, record) in entries {
            let value = serde_json::to_value(record).map_err(json_error)?;
            map.insert(name.as_str().to_string(), value);
        }

        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        map.serialize(&mut serializer).map_err(json_error)?;
        Ok(buffer)
    }

    fn write_file(path: &Path, contents: &[u8]) -> StorageResult<()> {
        fs::write(path, contents).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Decode one persisted `name -> record` pair.
fn decode_entry(key: String, value: Value) -> StorageResult<ContactEntry> {
    let name = ContactName::new(&key).map_err(|e| StorageError::InvalidRecord {
        name: key.clone(),
        reason: e.to_string(),
    })?;

    let record: ContactRecord =
        serde_json::from_value(value).map_err(|e| StorageError::InvalidRecord {
            name: key,
            reason: e.to_string(),
        })?;

    Ok((name, record))
}

impl ContactRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<Vec<ContactEntry>> {
        let contents = match fs::read_to_string(&self.data_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.data_path.display(), "No contacts file found, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.data_path.clone(),
                    source,
                })
            }
        };

        let map: Map<String, Value> =
            serde_json::from_str(&contents).map_err(|source| StorageError::Json {
                path: self.data_path.clone(),
                source,
            })?;

        let entries = map
            .into_iter()
            .map(|(key, value)| decode_entry(key, value))
            .collect::<StorageResult<Vec<_>>>()?;

        debug!(
            path = %self.data_path.display(),
            count = entries.len(),
            "Contacts file parsed"
        );
        Ok(entries)
    }

    fn save(&self, entries: &[ContactEntry]) -> StorageResult<()> {
        let contents = self.encode(entries)?;

        Self::write_file(&self.data_path, &contents)?;
        if let Err(e) = Self::write_file(&self.backup_path, &contents) {
            warn!(path = %self.backup_path.display(), error = %e, "Backup write failed");
            return Err(e);
        }

        debug!(
            data = %self.data_path.display(),
            backup = %self.backup_path.display(),
            count = entries.len(),
            "Contacts written"
        );
        Ok(())
    }
}
