//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the primary contact file.
pub const DEFAULT_DATA_FILE: &str = "contacts_data.json";

/// Default location of the backup copy written on every save.
pub const DEFAULT_BACKUP_FILE: &str = "contacts_backup.json";

/// Default location of the CSV export.
pub const DEFAULT_EXPORT_FILE: &str = "contacts_export.csv";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Primary JSON file holding all contacts
    pub data_file: PathBuf,

    /// Backup JSON file, a full duplicate of the primary file
    pub backup_file: PathBuf,

    /// Destination of the CSV export
    pub export_file: PathBuf,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DATA_FILE`: Primary data file (default: `contacts_data.json`)
    /// - `CONTACTS_BACKUP_FILE`: Backup data file (default: `contacts_backup.json`)
    /// - `CONTACTS_EXPORT_FILE`: CSV export file (default: `contacts_export.csv`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let data_file = Self::parse_env_path("CONTACTS_DATA_FILE", DEFAULT_DATA_FILE)?;
        let backup_file = Self::parse_env_path("CONTACTS_BACKUP_FILE", DEFAULT_BACKUP_FILE)?;
        let export_file = Self::parse_env_path("CONTACTS_EXPORT_FILE", DEFAULT_EXPORT_FILE)?;

        if data_file == backup_file {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_BACKUP_FILE".to_string(),
                reason: "Must differ from CONTACTS_DATA_FILE".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file,
            backup_file,
            export_file,
            log_level,
        })
    }

    /// Parse an environment variable as a file path with a default value.
    fn parse_env_path(var_name: &str, default: &str) -> ConfigResult<PathBuf> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(PathBuf::from(val.trim())),
            Err(env::VarError::NotPresent) => Ok(PathBuf::from(default)),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be valid UTF-8".to_string(),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            backup_file: PathBuf::from(DEFAULT_BACKUP_FILE),
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 4] = [
        "CONTACTS_DATA_FILE",
        "CONTACTS_BACKUP_FILE",
        "CONTACTS_EXPORT_FILE",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("contacts_data.json"));
        assert_eq!(config.backup_file, PathBuf::from("contacts_backup.json"));
        assert_eq!(config.export_file, PathBuf::from("contacts_export.csv"));
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();

        let config = Config::from_env().unwrap();
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.backup_file, PathBuf::from(DEFAULT_BACKUP_FILE));
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_DATA_FILE", "/tmp/book.json");
        guard.set("CONTACTS_BACKUP_FILE", "/tmp/book.bak.json");
        guard.set("CONTACTS_EXPORT_FILE", "/tmp/book.csv");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/book.json"));
        assert_eq!(config.backup_file, PathBuf::from("/tmp/book.bak.json"));
        assert_eq!(config.export_file, PathBuf::from("/tmp/book.csv"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_rejects_empty_path() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_DATA_FILE", "   ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "CONTACTS_DATA_FILE"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_backup_equal_to_data() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_DATA_FILE", "same.json");
        guard.set("CONTACTS_BACKUP_FILE", "same.json");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACTS_BACKUP_FILE")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }
}
