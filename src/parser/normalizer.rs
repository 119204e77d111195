// file: src/parser/normalizer.rs
// description: full-text cleanup applied before segmentation
// reference: text emitted by pdf-to-text and spreadsheet exports

pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, content: &str) -> String {
        let mut normalized = self.normalize_line_breaks(content);
        normalized = self.normalize_page_breaks(&normalized);
        self.normalize_spaces(&normalized)
    }

    fn normalize_line_breaks(&self, content: &str) -> String {
        content.replace("\r\n", "\n").replace('\r', "\n")
    }

    fn normalize_page_breaks(&self, content: &str) -> String {
        content.replace('\u{000C}', "\n")
    }

    // PDF extractors emit NBSP between label words ("IP\u{a0}Address").
    fn normalize_spaces(&self, content: &str) -> String {
        content
            .chars()
            .map(|c| match c {
                '\u{00A0}' | '\u{2007}' | '\u{202F}' => ' ',
                other => other,
            })
            .collect()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_break_normalization() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_page_break_normalization() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("page one\u{000C}page two"), "page one\npage two");
    }

    #[test]
    fn test_non_breaking_spaces() {
        let normalizer = TextNormalizer::new();
        let normalized = normalizer.normalize("IP\u{00A0}Address: 198.51.100.4");
        assert_eq!(normalized, "IP Address: 198.51.100.4");
    }
}
