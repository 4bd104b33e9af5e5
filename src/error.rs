//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by contact store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Name is blank after normalization
    #[error("Name cannot be empty")]
    EmptyName,

    /// A contact with the same normalized name already exists
    #[error("Contact already exists: {0}")]
    DuplicateContact(String),

    /// Phone does not contain 10 to 15 digits
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// Non-empty email does not match the required format
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    /// Update or delete target is not in the store
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

impl From<ValidationError> for ContactError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => Self::EmptyName,
            ValidationError::InvalidPhone(raw) => Self::InvalidPhone(raw),
            ValidationError::InvalidEmail(raw) => Self::InvalidEmail(raw),
        }
    }
}

/// Errors that can occur while loading or saving the contact file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing a file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid JSON for a contact map
    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two persisted names normalize to the same key
    #[error("Duplicate contact in stored data: {0}")]
    DuplicateKey(String),

    /// A persisted record violates a field rule
    #[error("Invalid stored record for {name}: {reason}")]
    InvalidRecord { name: String, reason: String },

    /// Writing the CSV export failed
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading the menu input or writing its output failed
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Saving contacts on exit failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
