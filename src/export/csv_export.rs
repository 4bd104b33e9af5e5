//! CSV export of all contacts.

use crate::domain::ContactName;
use crate::error::{StorageError, StorageResult};
use crate::models::ContactRecord;
use crate::store::ContactStore;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Header row of the export.
pub const CSV_HEADER: [&str; 5] = ["Name", "Phone", "Email", "Address", "Group"];

/// Write a header and one row per contact to `writer`.
///
/// Missing email or address values become empty cells. Returns the number of
/// contact rows written.
pub fn write_csv<'a, W, I>(writer: W, contacts: I) -> StorageResult<usize>
where
    W: Write,
    I: IntoIterator<Item = (&'a ContactName, &'a ContactRecord)>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for (name, record) in contacts {
        csv_writer.write_record([
            name.as_str(),
            record.phone().as_str(),
            record.email().map(|e| e.as_str()).unwrap_or(""),
            record.address().unwrap_or(""),
            record.group(),
        ])?;
        rows += 1;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(rows)
}

/// Writes the whole store to a CSV file.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Export every contact in `list_all()` order, replacing any existing file.
    pub fn export(&self, store: &ContactStore) -> StorageResult<usize> {
        let file = File::create(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;

        let rows = write_csv(file, store.list_all())?;
        info!(path = %self.path.display(), rows, "Contacts exported to CSV");
        Ok(rows)
    }
}
