// file: src/extractor/platform.rs
// description: reporting platform and chat service recognition over full report text
// reference: submitter block of the report header

use crate::config::PlatformField;
use crate::extractor::patterns::{CHAT_SERVICE, POINT_OF_CONTACT_PREFIX, SUBMITTER};
use tracing::debug;

pub fn recognize_platforms(text: &str, field: PlatformField) -> Vec<String> {
    match field {
        PlatformField::Submitter => recognize_submitter(text).into_iter().collect(),
        PlatformField::ChatService => recognize_chat_services(text),
    }
}

/// The line after the first `Submitter:` label, unless blank or a contact line.
pub fn recognize_submitter(text: &str) -> Option<String> {
    let caps = SUBMITTER.captures(text)?;
    let line = caps.get(2)?.as_str().trim();

    if line.is_empty() {
        return None;
    }
    if line.to_lowercase().starts_with(POINT_OF_CONTACT_PREFIX) {
        debug!("Submitter line is a contact field, skipping: {}", line);
        return None;
    }

    Some(line.to_string())
}

pub fn recognize_chat_services(text: &str) -> Vec<String> {
    CHAT_SERVICE
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_label_takes_second_line() {
        // whitespace after the label spans the newline, so the first line is the label value
        let text = "Submitter:\nExample Social, Inc.\nExample Chat\nBusiness Address: 1 Main St\n";
        assert_eq!(recognize_submitter(text), Some("Example Chat".to_string()));
    }

    #[test]
    fn test_submitter_with_inline_value() {
        let text = "Submitter: ESP Reporting\nExample Chat\nmore";
        assert_eq!(recognize_submitter(text), Some("Example Chat".to_string()));
    }

    #[test]
    fn test_point_of_contact_is_rejected() {
        let text = "Submitter: Example Social\nPoint of Contact for Law Enforcement: J. Doe\n";
        assert_eq!(recognize_submitter(text), None);
    }

    #[test]
    fn test_submitter_at_end_of_text() {
        assert_eq!(
            recognize_submitter("Submitter: x\nTail Platform"),
            Some("Tail Platform".to_string())
        );
        assert_eq!(recognize_submitter("Submitter: x\n"), None);
        assert_eq!(recognize_submitter("no label here"), None);
    }

    #[test]
    fn test_chat_service_variant() {
        let text = "Chat Service/IM Client: ExampleChat\nChat Service/IM Client:  OtherIM v2";
        assert_eq!(
            recognize_platforms(text, PlatformField::ChatService),
            vec!["ExampleChat".to_string(), "OtherIM".to_string()]
        );
        assert!(recognize_platforms(text, PlatformField::Submitter).is_empty());
    }
}
