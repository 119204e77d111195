// file: src/extractor/phone.rs
// description: north american phone number recognition with noise suppression
// reference: report issuer switchboards and hash fragments are not investigative data

use crate::extractor::patterns::{PHONE, digits_only, is_switchboard_number, is_word_char};
use tracing::debug;

/// Phone-shaped tokens not touching another word character on either side.
/// Returns the 3-3-4 portion verbatim, without any `+1` prefix.
pub fn find_phone_candidates(text: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = PHONE.captures_at(text, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else { break };

        let before_ok = !text[..whole.start()].chars().next_back().is_some_and(is_word_char);
        let after_ok = !text[whole.end()..].chars().next().is_some_and(is_word_char);

        if before_ok && after_ok {
            candidates.push(caps[1].to_string());
            pos = whole.end();
        } else {
            // retry from the next character so a shorter overlapping match can still qualify
            pos = whole.start()
                + text[whole.start()..]
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
        }
    }

    candidates
}

/// Candidates minus switchboard numbers and minus any whose digits occur
/// inside one of `section_hashes`.
pub fn recognize_phones(text: &str, section_hashes: &[String]) -> Vec<String> {
    find_phone_candidates(text)
        .into_iter()
        .filter(|phone| {
            let digits = digits_only(phone);
            if is_switchboard_number(&digits) {
                debug!("Suppressing switchboard number {}", phone);
                return false;
            }
            if section_hashes.iter().any(|h| h.contains(&digits)) {
                debug!("Suppressing phone {} found inside a hash", phone);
                return false;
            }
            true
        })
        .collect()
}
