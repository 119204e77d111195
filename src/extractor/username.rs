// file: src/extractor/username.rs
// description: labelled account identifier recognition
// reference: report account fields

use crate::config::UsernameLabels;
use crate::extractor::patterns::{EXTENDED_USERNAME_LABEL, USERNAME_LABELS, label_token_pattern};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref STANDARD_PATTERNS: Vec<Regex> =
        USERNAME_LABELS.iter().map(|label| label_token_pattern(label)).collect();
    static ref EXTENDED_PATTERN: Regex = label_token_pattern(EXTENDED_USERNAME_LABEL);
}

/// First non-whitespace token after every occurrence of each label, verbatim.
pub fn recognize_usernames(text: &str, labels: UsernameLabels) -> Vec<String> {
    let extended = match labels {
        UsernameLabels::Standard => None,
        UsernameLabels::Extended => Some(&*EXTENDED_PATTERN),
    };

    STANDARD_PATTERNS
        .iter()
        .chain(extended)
        .flat_map(|pattern| pattern.captures_iter(text))
        .map(|caps| caps[1].to_string())
        .collect()
}
