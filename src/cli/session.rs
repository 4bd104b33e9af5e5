//! The main menu loop.

use super::display::{format_contact, format_statistics};
use super::menu::MenuChoice;
use crate::domain::contact_name::title_case;
use crate::domain::{validate_email, validate_phone};
use crate::error::{ContactError, SessionError};
use crate::export::CsvExporter;
use crate::models::{ContactUpdate, DeleteOutcome, NewContact};
use crate::repositories::ContactRepository;
use crate::store::ContactStore;
use std::io::{self, BufRead, Write};
use tracing::{debug, error, warn};

/// An interactive session over a contact store.
///
/// The session runs until the user picks Exit or the input ends; either way the
/// store is saved through the repository before returning.
pub struct Session<'a, R, W> {
    store: ContactStore,
    repository: &'a dyn ContactRepository,
    exporter: CsvExporter,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        store: ContactStore,
        repository: &'a dyn ContactRepository,
        exporter: CsvExporter,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            repository,
            exporter,
            input,
            output,
        }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Consume the session, returning the store and the output sink.
    pub fn into_parts(self) -> (ContactStore, W) {
        (self.store, self.output)
    }

    /// Run the menu loop until Exit or end of input, then save.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the final save fails. The in-memory
    /// store is left as it was.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice (1-8): ")? else {
                debug!("Input closed, saving and exiting");
                break;
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Add) => self.add_contact()?,
                Ok(MenuChoice::Search) => self.search_contacts()?,
                Ok(MenuChoice::Update) => self.update_contact()?,
                Ok(MenuChoice::Delete) => self.delete_contact()?,
                Ok(MenuChoice::ViewAll) => self.display_all_contacts()?,
                Ok(MenuChoice::Export) => self.export_to_csv()?,
                Ok(MenuChoice::Statistics) => self.show_statistics()?,
                Ok(MenuChoice::Exit) => break,
                Err(e) => {
                    debug!(error = %e, "Rejected menu input");
                    writeln!(self.output, "❌ Invalid choice. Try again.")?;
                }
            }
        }

        self.save()?;
        writeln!(
            self.output,
            "👋 Thank you for using Contact Management System!"
        )?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(50);
        writeln!(self.output, "\n{}", rule)?;
        writeln!(self.output, "CONTACT MANAGEMENT SYSTEM")?;
        writeln!(self.output, "{}", rule)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    /// Print `label` and read one trimmed line. `None` means the input has ended.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        Ok(self.prompt_raw(label)?.map(|line| line.trim().to_string()))
    }

    /// Like `prompt`, but only the line ending is removed.
    fn prompt_raw(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let content_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(content_len);
        Ok(Some(line))
    }

    fn add_contact(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "\n--- ADD NEW CONTACT ---")?;

        let Some(name) = self.prompt("Enter contact name: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            writeln!(self.output, "❌ Name cannot be empty.")?;
            return Ok(());
        }
        if self.store.contains(&name) {
            writeln!(self.output, "❌ Contact already exists.")?;
            return Ok(());
        }

        let Some(phone) = self.prompt("Enter phone number: ")? else {
            return Ok(());
        };
        if validate_phone(&phone).is_none() {
            writeln!(self.output, "❌ Invalid phone number.")?;
            return Ok(());
        }

        let Some(email) = self.prompt("Enter email (optional): ")? else {
            return Ok(());
        };
        if !validate_email(Some(email.as_str())) {
            writeln!(self.output, "❌ Invalid email format.")?;
            return Ok(());
        }

        let Some(address) = self.prompt("Enter address (optional): ")? else {
            return Ok(());
        };
        let Some(group) = self.prompt("Enter group (Friends/Work/Family/Other): ")? else {
            return Ok(());
        };

        let request = NewContact {
            name,
            phone,
            email: Some(email),
            address: Some(address),
            group: Some(group),
        };

        match self.store.add(request) {
            Ok((name, _)) => {
                writeln!(self.output, "✅ Contact '{}' added successfully!", name)?
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn search_contacts(&mut self) -> Result<(), SessionError> {
        let Some(term) = self.prompt_raw("Enter name or phone to search: ")? else {
            return Ok(());
        };

        let results = self.store.search(&term);
        if results.is_empty() {
            writeln!(self.output, "❌ No contacts found.")?;
            return Ok(());
        }

        writeln!(self.output, "\nFound {} contact(s):", results.len())?;
        writeln!(self.output, "{}", "-".repeat(50))?;
        for (name, record) in results {
            write!(self.output, "{}", format_contact(name, record))?;
        }
        Ok(())
    }

    fn update_contact(&mut self) -> Result<(), SessionError> {
        let Some(name) = self.prompt("Enter contact name to update: ")? else {
            return Ok(());
        };
        if !self.store.contains(&name) {
            writeln!(self.output, "❌ Contact not found.")?;
            return Ok(());
        }

        writeln!(self.output, "Leave blank to keep existing value.")?;
        let mut changes = ContactUpdate::default();
        for (label, field) in [
            ("New phone: ", &mut changes.phone),
            ("New email: ", &mut changes.email),
            ("New address: ", &mut changes.address),
            ("New group: ", &mut changes.group),
        ] {
            let Some(value) = self.prompt(label)? else {
                return Ok(());
            };
            *field = Some(value);
        }

        match self.store.update(&name, changes) {
            Ok(outcome) => {
                for field in &outcome.rejected {
                    warn!(name = %name, field = %field, "Ignored invalid value in update");
                    writeln!(
                        self.output,
                        "⚠️  Invalid {} ignored; keeping existing value.",
                        field
                    )?;
                }
                writeln!(self.output, "✅ Contact updated successfully.")?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn delete_contact(&mut self) -> Result<(), SessionError> {
        let Some(name) = self.prompt("Enter contact name to delete: ")? else {
            return Ok(());
        };
        if !self.store.contains(&name) {
            writeln!(self.output, "❌ Contact not found.")?;
            return Ok(());
        }

        let question = format!(
            "Are you sure you want to delete {}? (y/n): ",
            title_case(&name)
        );
        let Some(answer) = self.prompt(&question)? else {
            return Ok(());
        };
        let confirmed = answer.eq_ignore_ascii_case("y");

        match self.store.delete(&name, confirmed) {
            Ok(DeleteOutcome::Deleted(_)) => {
                writeln!(self.output, "✅ Contact deleted successfully.")?
            }
            Ok(DeleteOutcome::Cancelled) => writeln!(self.output, "Deletion cancelled.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn display_all_contacts(&mut self) -> Result<(), SessionError> {
        let contacts = self.store.list_all();
        if contacts.is_empty() {
            writeln!(self.output, "❌ No contacts available.")?;
            return Ok(());
        }

        writeln!(self.output, "\n--- ALL CONTACTS ({}) ---", contacts.len())?;
        writeln!(self.output, "{}", "=".repeat(60))?;
        for (name, record) in contacts {
            write!(self.output, "{}", format_contact(name, record))?;
        }
        Ok(())
    }

    fn export_to_csv(&mut self) -> Result<(), SessionError> {
        match self.exporter.export(&self.store) {
            Ok(_) => writeln!(self.output, "✅ Contacts exported to CSV.")?,
            Err(e) => {
                error!(error = %e, "CSV export failed");
                writeln!(self.output, "❌ Export failed: {}", e)?;
            }
        }
        Ok(())
    }

    fn show_statistics(&mut self) -> Result<(), SessionError> {
        let stats = self.store.statistics();
        write!(self.output, "{}", format_statistics(&stats))?;
        Ok(())
    }

    fn save(&mut self) -> Result<(), SessionError> {
        if let Err(e) = self.store.persist(self.repository) {
            error!(error = %e, "Saving contacts failed");
            writeln!(self.output, "❌ Failed to save contacts: {}", e)?;
            return Err(e.into());
        }
        writeln!(self.output, "✅ Contacts saved successfully.")?;
        Ok(())
    }

    fn report(&mut self, err: &ContactError) -> io::Result<()> {
        let message = match err {
            ContactError::EmptyName => "Name cannot be empty.",
            ContactError::DuplicateContact(_) => "Contact already exists.",
            ContactError::InvalidPhone(_) => "Invalid phone number.",
            ContactError::InvalidEmail(_) => "Invalid email format.",
            ContactError::ContactNotFound(_) => "Contact not found.",
        };
        writeln!(self.output, "❌ {}", message)
    }
}
