//! Contact Book - Main entry point
//!
//! Loads the contact file, runs the interactive menu on stdin/stdout and saves
//! on exit.

use anyhow::{Context, Result};
use contact_book::{Config, ContactStore, CsvExporter, JsonFileRepository, Session, SystemClock};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only, stdout is the menu)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        data_file = %config.data_file.display(),
        backup_file = %config.backup_file.display(),
        "Configuration loaded"
    );

    let repository = JsonFileRepository::new(&config.data_file, &config.backup_file);
    let found_existing = repository.has_data();

    let store = match ContactStore::load(&repository, SystemClock) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load contacts: {}", e);
            return Err(e).context("Failed to load contacts");
        }
    };

    if found_existing {
        println!("✅ Contacts loaded successfully.");
    } else {
        println!("✅ No existing contacts file found. Starting fresh.");
    }

    let exporter = CsvExporter::new(&config.export_file);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(store, &repository, exporter, stdin.lock(), stdout.lock());

    session.run().context("Contact session ended with an error")?;

    info!("Contact book shutdown complete");
    Ok(())
}
