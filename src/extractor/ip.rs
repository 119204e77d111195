// file: src/extractor/ip.rs
// description: ip address and upload timestamp pair recognition
// reference: narrative and tabular report layouts

use crate::extractor::patterns::{IP_LOOSE, IP_NARRATIVE, IP_TABLE};
use crate::parser::timestamp::{NormalizedTimestamp, normalize};
use regex::Regex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpShape {
    /// "IP Address" + ip, then the next `MM-DD-YYYY HH:MM:SS UTC` anywhere after.
    Narrative,
    /// "IP Address" ip "Upload" timestamp on one row.
    Table,
    /// Any dotted quad followed by the next timestamp; spreadsheet rows only.
    Loose,
}

impl IpShape {
    /// Shapes run over every relevant report section.
    pub const REPORT: [IpShape; 2] = [IpShape::Narrative, IpShape::Table];

    fn pattern(&self) -> &'static Regex {
        match self {
            IpShape::Narrative => &IP_NARRATIVE,
            IpShape::Table => &IP_TABLE,
            IpShape::Loose => &IP_LOOSE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpSighting {
    pub ip: String,
    pub timestamp: NormalizedTimestamp,
}

/// Runs each shape over `text` and returns the union of their pairs.
/// Pairs whose timestamp cannot be normalized are dropped.
pub fn recognize_ip_timestamps(text: &str, shapes: &[IpShape]) -> Vec<IpSighting> {
    let mut sightings = Vec::new();

    for shape in shapes {
        for caps in shape.pattern().captures_iter(text) {
            let ip = &caps[1];
            let raw = &caps[2];

            match normalize(raw) {
                Ok(timestamp) => sightings.push(IpSighting {
                    ip: ip.to_string(),
                    timestamp,
                }),
                Err(e) => {
                    debug!("Dropping {:?} ip {}: {}", shape, ip, e);
                }
            }
        }
    }

    sightings
}
