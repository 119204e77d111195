// file: src/models/entity.rs
// description: recognized entity occurrences and their aggregate categories
// reference: forensic indicator categories

use crate::parser::timestamp::NormalizedTimestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between ip and timestamp in the canonical ip form.
pub const IP_TIMESTAMP_SEPARATOR: &str = "→";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hashes,
    Ips,
    Emails,
    Phones,
    Usernames,
    Platforms,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Hashes,
        Category::Ips,
        Category::Emails,
        Category::Phones,
        Category::Usernames,
        Category::Platforms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hashes => "hashes",
            Category::Ips => "ips",
            Category::Emails => "emails",
            Category::Phones => "phones",
            Category::Usernames => "usernames",
            Category::Platforms => "platforms",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recognized indicator, before deduplication across documents.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Entity {
    Hash(String),
    IpTimestamp {
        ip: String,
        timestamp: NormalizedTimestamp,
    },
    Email(String),
    Phone(String),
    Username(String),
    Platform(String),
}

impl Entity {
    pub fn category(&self) -> Category {
        match self {
            Entity::Hash(_) => Category::Hashes,
            Entity::IpTimestamp { .. } => Category::Ips,
            Entity::Email(_) => Category::Emails,
            Entity::Phone(_) => Category::Phones,
            Entity::Username(_) => Category::Usernames,
            Entity::Platform(_) => Category::Platforms,
        }
    }

    /// String form used for storage, deduplication and export.
    pub fn canonical(&self) -> String {
        match self {
            Entity::IpTimestamp { ip, timestamp } => {
                format!("{} {} {}", ip, IP_TIMESTAMP_SEPARATOR, timestamp.canonical())
            }
            Entity::Hash(value)
            | Entity::Email(value)
            | Entity::Phone(value)
            | Entity::Username(value)
            | Entity::Platform(value) => value.clone(),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::timestamp::normalize;

    #[test]
    fn test_ip_canonical_form() {
        let entity = Entity::IpTimestamp {
            ip: "203.0.113.7".to_string(),
            timestamp: normalize("06-15-2023 14:30:00 UTC").unwrap(),
        };

        assert_eq!(entity.category(), Category::Ips);
        assert_eq!(entity.canonical(), "203.0.113.7 → 2023-06-15 14:30:00");
    }

    #[test]
    fn test_category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_name("md5"), None);
    }

    #[test]
    fn test_plain_entities_are_verbatim() {
        let entity = Entity::Username("Agent_007!".to_string());
        assert_eq!(entity.canonical(), "Agent_007!");
        assert_eq!(entity.to_string(), "usernames: Agent_007!");
    }
}
