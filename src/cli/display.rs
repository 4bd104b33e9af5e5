//! Console rendering of contacts and statistics.

use crate::domain::ContactName;
use crate::models::{ContactRecord, Statistics};
use std::fmt::Write;

/// Render one contact as a block of lines, ending with a separator.
///
/// Email and address lines are omitted when the field is empty.
pub fn format_contact(name: &ContactName, record: &ContactRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "👤 {}", name);
    let _ = writeln!(out, "   📞 {}", record.phone());
    if let Some(email) = record.email() {
        let _ = writeln!(out, "   📧 {}", email);
    }
    if let Some(address) = record.address() {
        let _ = writeln!(out, "   📍 {}", address);
    }
    let _ = writeln!(out, "   👥 {}", record.group());
    let _ = writeln!(out, "{}", "-".repeat(40));
    out
}

pub fn format_statistics(stats: &Statistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- CONTACT STATISTICS ---");
    let _ = writeln!(out, "Total Contacts: {}", stats.total);
    let _ = writeln!(out, "Contacts by Group:");
    for (group, count) in &stats.by_group {
        let _ = writeln!(out, "  {}: {}", group, count);
    }
    out
}
