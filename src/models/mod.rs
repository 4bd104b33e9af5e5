//! Data models for the contact book.
//!
//! This module contains the stored contact record and the request and outcome
//! types exchanged with the contact store.

pub mod contact;

pub use contact::{
    ContactField, ContactRecord, ContactUpdate, DeleteOutcome, NewContact, Statistics,
    UpdateOutcome, DEFAULT_GROUP,
};
