//! In-memory contact store.
//!
//! The store owns every contact record, keyed by normalized name, and is the
//! only place where records are created, changed or removed.

mod clock;
mod contact_store;

pub use clock::{Clock, SystemClock};
pub use contact_store::ContactStore;
