//! Caller-owned activity log.

use chrono::{DateTime, Utc};

use stockkeep_core::{ItemName, Quantity};

/// Append-only list of human-readable lines, one per successful addition.
///
/// The inventory only ever writes to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: Vec<String>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `"<timestamp>: Added <qty> of <item>"`.
    pub fn record_addition(&mut self, at: DateTime<Utc>, item: &ItemName, qty: Quantity) {
        self.entries
            .push(format!("{}: Added {qty} of {item}", at.to_rfc3339()));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
