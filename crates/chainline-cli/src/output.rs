//! Output formatting utilities.

use chainline_model::columns;
use serde_json::Value;

/// Formats a record as a simple table row.
pub fn format_table_row(record: &Value) -> String {
    let event_id = record
        .get(columns::EVENT_ID)
        .and_then(|v| v.as_str())
        .unwrap_or("?");
    let event_type = record
        .get(columns::TYPE)
        .and_then(|v| v.as_str())
        .unwrap_or("?");
    let timestamp = record
        .get(columns::TIMESTAMP)
        .and_then(|v| v.as_str())
        .unwrap_or("?");
    let address = record
        .get(columns::ADDRESS)
        .and_then(|v| v.as_str())
        .unwrap_or("?");

    format!(
        "{:<36} {:<17} {:<24} {}",
        truncate(event_id, 36),
        event_type,
        truncate(timestamp, 24),
        address
    )
}

/// Prints table header.
pub fn print_table_header() {
    println!(
        "{:<36} {:<17} {:<24} {}",
        "EVENT_ID", "TYPE", "TIMESTAMP", "ADDRESS"
    );
    println!("{}", "-".repeat(100));
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
