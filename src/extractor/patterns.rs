// file: src/extractor/patterns.rs
// description: compiled regex patterns and fixed suppression lists for entity extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

/// Label keys whose following token is recorded as a username.
pub const USERNAME_LABELS: [&str; 3] = ["Screen/User Name:", "Display Name:", "ESP User ID:"];

/// Extra label recorded when the extended username variant is active.
pub const EXTENDED_USERNAME_LABEL: &str = "Home Email Address:";

/// Report-issuer domains; addresses containing these are issuer contacts.
pub const ISSUER_EMAIL_DOMAINS: [&str; 2] = ["@ncmec.org", "@ilag.gov"];

/// Any government address is treated as issuer noise.
pub const GOVERNMENT_DOMAIN_MARKER: &str = ".gov";

/// Report-issuer switchboard numbers, as 10-digit keys.
pub const SWITCHBOARD_NUMBERS: [&str; 2] = ["2177829030", "8774462632"];

/// Platform lines starting with this phrase belong to the contact field.
pub const POINT_OF_CONTACT_PREFIX: &str = "point of contact";

lazy_static! {
    pub static ref MD5_HASH: Regex = Regex::new(
        r"\b[a-fA-F0-9]{32}\b"
    ).expect("MD5_HASH regex is valid");

    // "IP Address: 1.2.3.4 ... 06-15-2023 14:30:00 UTC", possibly across lines.
    pub static ref IP_NARRATIVE: Regex = Regex::new(
        r"(?s)IP Address[:\s]*(\d{1,3}(?:\.\d{1,3}){3}).*?(\d{2}-\d{2}-\d{4} \d{2}:\d{2}:\d{2} UTC)"
    ).expect("IP_NARRATIVE regex is valid");

    // Tabular rows print the date as "MM-DDDD"; matched exactly as it appears.
    pub static ref IP_TABLE: Regex = Regex::new(
        r"IP Address\s+(\d{1,3}(?:\.\d{1,3}){3})\s+Upload\s+(\d{2}-\d{4} \d{2}:\d{2}:\d{2} UTC)"
    ).expect("IP_TABLE regex is valid");

    // Unsectioned spreadsheet rows: any dotted quad, then the next timestamp.
    pub static ref IP_LOOSE: Regex = Regex::new(
        r"(?s)\b(\d{1,3}(?:\.\d{1,3}){3})\b.*?(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}|\d{2}-\d{2}-\d{4} \d{2}:\d{2}:\d{2})"
    ).expect("IP_LOOSE regex is valid");

    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+"
    ).expect("EMAIL regex is valid");

    // Optional +1 prefix, then 3-3-4 digits. Group 1 is the stored display form.
    // Word-character boundaries are checked by the phone recognizer.
    pub static ref PHONE: Regex = Regex::new(
        r"(?:\+1[-.\s]?)?(\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4})"
    ).expect("PHONE regex is valid");

    pub static ref SUBMITTER: Regex = Regex::new(
        r"(?s)Submitter:\s*(.*?)\n(.*?)(?:\n|$)"
    ).expect("SUBMITTER regex is valid");

    pub static ref CHAT_SERVICE: Regex = Regex::new(
        r"Chat Service/IM Client:\s*(\S+)"
    ).expect("CHAT_SERVICE regex is valid");

    static ref NON_DIGIT: Regex = Regex::new(r"\D").expect("NON_DIGIT regex is valid");
}

/// Builds the `<label>\s*(\S+)` pattern for one username label.
pub fn label_token_pattern(label: &str) -> Regex {
    Regex::new(&format!(r"{}\s*(\S+)", regex::escape(label)))
        .expect("escaped label pattern is valid")
}

pub fn digits_only(value: &str) -> String {
    NON_DIGIT.replace_all(value, "").into_owned()
}

pub fn is_switchboard_number(digits: &str) -> bool {
    SWITCHBOARD_NUMBERS.contains(&digits)
}

pub fn is_issuer_email(email: &str) -> bool {
    let lowered = email.to_lowercase();
    lowered.contains(GOVERNMENT_DOMAIN_MARKER)
        || ISSUER_EMAIL_DOMAINS
            .iter()
            .any(|domain| lowered.contains(domain))
}

/// Unicode `\w`: letters, digits, underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_pattern() {
        assert!(MD5_HASH.is_match("d41d8cd98f00b204e9800998ecf8427e"));
        assert!(MD5_HASH.is_match("D41D8CD98F00B204E9800998ECF8427E"));
        assert!(!MD5_HASH.is_match("d41d8cd98f00b204e9800998ecf8427"));
        assert!(!MD5_HASH.is_match("d41d8cd98f00b204e9800998ecf8427e0"));
        assert!(!MD5_HASH.is_match("xd41d8cd98f00b204e9800998ecf8427e"));
    }

    #[test]
    fn test_table_pattern_requires_compressed_date() {
        assert!(IP_TABLE.is_match("IP Address 10.1.2.3 Upload 06-2023 14:30:00 UTC"));
        assert!(!IP_TABLE.is_match("IP Address 10.1.2.3 Upload 06-15-2023 14:30:00 UTC"));
    }

    #[test]
    fn test_label_pattern_escapes_metacharacters() {
        let pattern = label_token_pattern("Screen/User Name:");
        let caps = pattern.captures("Screen/User Name:   agent007 trailing").unwrap();
        assert_eq!(&caps[1], "agent007");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("(217) 782-9030"), "2177829030");
        assert!(is_switchboard_number(&digits_only("877.446.2632")));
        assert!(!is_switchboard_number("5550102030"));
    }

    #[test]
    fn test_issuer_email_detection() {
        assert!(is_issuer_email("someone@ncmec.org"));
        assert!(is_issuer_email("Analyst@ILAG.GOV"));
        assert!(is_issuer_email("agent@fbi.gov"));
        assert!(!is_issuer_email("suspect@example.com"));
    }
}
