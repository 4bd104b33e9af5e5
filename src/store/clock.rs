//! Time source for record timestamps.

use crate::models::contact::TIMESTAMP_FORMAT;
use chrono::{Local, NaiveDateTime};

/// Supplies the current time as an ISO 8601 string.
pub trait Clock {
    fn now(&self) -> String;
}

/// Wall clock in local time, formatted with microsecond precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Whether timestamp `a` is strictly earlier than `b`.
///
/// Both are parsed as ISO 8601 local times; if either fails to parse the
/// strings are compared directly.
pub(crate) fn is_before(a: &str, b: &str) -> bool {
    match (a.parse::<NaiveDateTime>(), b.parse::<NaiveDateTime>()) {
        (Ok(a), Ok(b)) => a < b,
        _ => a < b,
    }
}
