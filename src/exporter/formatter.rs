// file: src/exporter/formatter.rs
// description: deterministic ordering of a category's values for display and export
// reference: ips sort chronologically, everything else lexicographically

use crate::models::{Category, IP_TIMESTAMP_SEPARATOR};
use crate::parser::timestamp::parse_canonical;
use chrono::NaiveDateTime;
use std::collections::BTreeSet;

pub fn format_category(category: Category, values: &BTreeSet<String>) -> Vec<String> {
    // BTreeSet iteration is already lexicographic
    let mut ordered: Vec<String> = values.iter().cloned().collect();

    if category == Category::Ips {
        // stable, so equal instants keep lexicographic order
        ordered.sort_by_key(|entry| ip_entry_instant(entry));
    }

    ordered
}

/// Instant from `"<ip> → <timestamp>"`; entries that do not re-parse sort first.
pub fn ip_entry_instant(entry: &str) -> NaiveDateTime {
    entry
        .rsplit(IP_TIMESTAMP_SEPARATOR)
        .next()
        .and_then(parse_canonical)
        .unwrap_or(NaiveDateTime::MIN)
}
