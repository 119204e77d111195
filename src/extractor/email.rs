// file: src/extractor/email.rs
// description: email address recognition with issuer-domain suppression
// reference: report issuer contact details are not investigative data

use crate::extractor::patterns::{EMAIL, is_issuer_email};
use tracing::debug;

pub fn recognize_emails(text: &str) -> Vec<String> {
    EMAIL
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|email| {
            let keep = !is_issuer_email(email);
            if !keep {
                debug!("Suppressing issuer email {}", email);
            }
            keep
        })
        .map(str::to_string)
        .collect()
}
