// file: src/extractor/entities.rs
// description: runs every recognizer over one block of text and returns typed entities
// reference: section-scoped recognizers plus the full-text platform recognizer

use crate::config::{ExtractionConfig, PlatformField, UsernameLabels};
use crate::extractor::email::recognize_emails;
use crate::extractor::hash::recognize_hashes;
use crate::extractor::ip::{IpShape, recognize_ip_timestamps};
use crate::extractor::phone::recognize_phones;
use crate::extractor::platform::recognize_platforms;
use crate::extractor::username::recognize_usernames;
use crate::models::Entity;

#[derive(Debug, Clone, Copy)]
pub struct EntityExtractor {
    username_labels: UsernameLabels,
    platform_field: PlatformField,
}

impl EntityExtractor {
    pub fn new(username_labels: UsernameLabels, platform_field: PlatformField) -> Self {
        Self {
            username_labels,
            platform_field,
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(config.username_labels, config.platform_field)
    }

    /// Hash, ip, email, phone and username recognizers over one section.
    /// The phone hash guard only sees hashes from this same text.
    pub fn extract_section(&self, text: &str, ip_shapes: &[IpShape]) -> Vec<Entity> {
        let hashes = recognize_hashes(text);
        let mut entities = Vec::new();

        entities.extend(
            recognize_ip_timestamps(text, ip_shapes)
                .into_iter()
                .map(|s| Entity::IpTimestamp {
                    ip: s.ip,
                    timestamp: s.timestamp,
                }),
        );
        entities.extend(recognize_emails(text).into_iter().map(Entity::Email));
        entities.extend(recognize_phones(text, &hashes).into_iter().map(Entity::Phone));
        entities.extend(
            recognize_usernames(text, self.username_labels)
                .into_iter()
                .map(Entity::Username),
        );
        entities.extend(hashes.into_iter().map(Entity::Hash));

        entities
    }

    /// Platform recognizer; runs over the full document text.
    pub fn extract_platforms(&self, full_text: &str) -> Vec<Entity> {
        recognize_platforms(full_text, self.platform_field)
            .into_iter()
            .map(Entity::Platform)
            .collect()
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new(UsernameLabels::Standard, PlatformField::Submitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_section_extraction_covers_all_kinds() {
        let text = "Screen/User Name: agent007\n\
                    Email Address: suspect@example.com\n\
                    Phone: (555) 010-2030\n\
                    MD5: d41d8cd98f00b204e9800998ecf8427e\n\
                    IP Address: 203.0.113.7 06-15-2023 14:30:00 UTC";

        let entities = EntityExtractor::default().extract_section(text, &IpShape::REPORT);
        let mut categories: Vec<Category> = entities.iter().map(Entity::category).collect();
        categories.sort();

        assert_eq!(
            categories,
            vec![
                Category::Hashes,
                Category::Ips,
                Category::Emails,
                Category::Phones,
                Category::Usernames,
            ]
        );
    }

    #[test]
    fn test_phone_guard_uses_same_section_hashes() {
        let text = "MD5: 001122335550102030aabbccddeeff00\n555-010-2030";
        let entities = EntityExtractor::default().extract_section(text, &IpShape::REPORT);

        assert!(entities.iter().all(|e| e.category() != Category::Phones));
        assert_eq!(entities.len(), 1);
    }

    #[test]
    fn test_platforms_ignore_section_scope() {
        let extractor = EntityExtractor::default();
        let found = extractor.extract_platforms("Submitter: x\nExample Chat\n");
        assert_eq!(found, vec![Entity::Platform("Example Chat".to_string())]);
    }
}
