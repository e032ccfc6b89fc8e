//! Plain-text inventory report.

use std::io;

use crate::store::InventoryStore;

/// First line of every report.
pub const REPORT_HEADING: &str = "Items Report:";

/// Render the heading followed by one `"<item> -> <quantity>"` line per item.
pub fn format_report(store: &InventoryStore) -> String {
    let mut out = String::from(REPORT_HEADING);
    out.push('\n');
    for (item, qty) in store.iter() {
        out.push_str(&format!("{item} -> {qty}\n"));
    }
    out
}

/// Write the report to any sink (stdout, a file, a buffer).
pub fn write_report(store: &InventoryStore, mut out: impl io::Write) -> io::Result<()> {
    out.write_all(format_report(store).as_bytes())?;
    out.flush()
}
