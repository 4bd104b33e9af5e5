//! Export of the contact book to other formats.

mod csv_export;

pub use csv_export::{write_csv, CsvExporter, CSV_HEADER};
