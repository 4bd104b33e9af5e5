//! Interactive text menu.
//!
//! The menu reads one line per prompt from any `BufRead` and writes to any
//! `Write`, so the whole session can be driven from tests.

mod display;
mod menu;
mod session;

pub use display::{format_contact, format_statistics};
pub use menu::MenuChoice;
pub use session::Session;
