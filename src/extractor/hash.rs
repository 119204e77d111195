// file: src/extractor/hash.rs
// description: 32-hex-digit hash recognition
// reference: md5 digest notation

use crate::extractor::patterns::MD5_HASH;

/// Every standalone 32-hex-digit token, verbatim and in text order.
/// No checksum or case normalization is applied.
pub fn recognize_hashes(text: &str) -> Vec<String> {
    MD5_HASH
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
