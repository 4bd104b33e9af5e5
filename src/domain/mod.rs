//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact record:
//! the normalized contact name, the canonical phone number and the email address.
//! These value objects validate at construction time so an invalid value can never
//! be stored.

pub mod contact_name;
pub mod email;
pub mod errors;
pub mod phone;

pub use contact_name::ContactName;
pub use email::{validate_email, EmailAddress};
pub use errors::ValidationError;
pub use phone::{validate_phone, PhoneNumber};
