// file: src/parser/timestamp.rs
// description: multi-format timestamp normalization to one canonical form
// reference: https://docs.rs/chrono/latest/chrono/format/strftime

use crate::error::{ExtractError, Result};
use chrono::NaiveDateTime;
use std::fmt;

/// Canonical output format, also the format re-parsed when sorting exports.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted input layouts, tried in order after a trailing `UTC` is removed.
/// `MM-DD-YYYY HH:MM:SS UTC` reduces to the first entry.
pub const KNOWN_FORMATS: [&str; 2] = ["%m-%d-%Y %H:%M:%S", CANONICAL_FORMAT];

const UTC_SUFFIX: &str = "UTC";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedTimestamp {
    instant: NaiveDateTime,
}

impl NormalizedTimestamp {
    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    pub fn canonical(&self) -> String {
        self.instant.format(CANONICAL_FORMAT).to_string()
    }
}

impl fmt::Display for NormalizedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.instant.format(CANONICAL_FORMAT))
    }
}

/// Parses `raw` in any of the known layouts. No timezone conversion happens;
/// a `UTC` suffix is only stripped.
pub fn normalize(raw: &str) -> Result<NormalizedTimestamp> {
    let trimmed = raw.trim();
    let bare = trimmed
        .strip_suffix(UTC_SUFFIX)
        .map(str::trim_end)
        .unwrap_or(trimmed);

    KNOWN_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(bare, format).ok())
        .map(|instant| NormalizedTimestamp { instant })
        .ok_or_else(|| ExtractError::UnparsableTimestamp(raw.to_string()))
}

/// Re-parses a canonical string; used for export ordering.
pub fn parse_canonical(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), CANONICAL_FORMAT).ok()
}
