//! Contact Book - a personal contact directory manager.
//!
//! This library keeps a set of named contact records, validates every field
//! before it is stored, and persists the records to a local JSON file between
//! sessions.
//!
//! # Architecture
//!
//! - **domain**: Value objects for names, phone numbers and email addresses
//! - **models**: The stored contact record plus request and outcome types
//! - **store**: The in-memory contact store and its operations
//! - **repositories**: Persistence of the store (JSON file with backup)
//! - **export**: CSV export
//! - **cli**: The interactive text menu
//! - **config**: Configuration from environment variables
//! - **error**: Error types for each layer

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod models;
pub mod repositories;
pub mod store;

// Re-export commonly used types
pub use cli::{MenuChoice, Session};
pub use config::Config;
pub use domain::{validate_email, validate_phone, ContactName, EmailAddress, PhoneNumber};
pub use error::{ConfigError, ContactError, SessionError, StorageError};
pub use export::CsvExporter;
pub use models::{
    ContactField, ContactRecord, ContactUpdate, DeleteOutcome, NewContact, Statistics,
    UpdateOutcome,
};
pub use repositories::{ContactRepository, JsonFileRepository};
pub use store::{Clock, ContactStore, SystemClock};
