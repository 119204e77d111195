// file: src/parser/sections.rs
// description: splits report text into lettered sections at "Section X:" headings
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    /// `Section`, one letter A-D, a colon. The letter is capture group 1.
    pub static ref SECTION_HEADING: Regex =
        Regex::new(r"\bSection ([A-D]):").expect("SECTION_HEADING regex is valid");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub letter: char,
    pub text: String,
    title: String,
}

impl Section {
    /// Remainder of the heading line, e.g. "Reported Information".
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Sections keyed by the bare `Section X:` marker, without the title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: BTreeMap<String, Section>,
}

impl SectionMap {
    pub fn get(&self, heading: &str) -> Option<&Section> {
        self.sections.get(heading)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Sections whose letter is in `letters`.
    pub fn relevant<'a>(&'a self, letters: &'a [char]) -> impl Iterator<Item = &'a Section> + 'a {
        self.iter().filter(move |s| letters.contains(&s.letter))
    }

    /// Heading text mapped to section text, for display and tests.
    pub fn to_text_map(&self) -> BTreeMap<String, String> {
        self.sections
            .iter()
            .map(|(k, s)| (k.clone(), s.text.clone()))
            .collect()
    }
}

/// Each section spans from the end of its heading to the start of the next
/// heading, or to the end of the text.
///
/// The key is only the `Section X:` marker, because a heading's title cannot
/// be told apart from section text when headings share a line
/// (`Section A: foo Section B: bar`). A consequence is that every heading
/// with the same letter lands on one key whatever its title, and the last
/// one replaces the others. A continuation heading such as
/// `Section A: Reported Information (continued)` therefore drops the text of
/// the first `Section A:` block.
pub fn segment(text: &str) -> SectionMap {
    let headings: Vec<_> = SECTION_HEADING.captures_iter(text).collect();
    let mut sections = BTreeMap::new();

    for (i, caps) in headings.iter().enumerate() {
        let Some(heading) = caps.get(0) else { continue };
        let letter = caps[1].chars().next().unwrap_or('A');
        let end = headings
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(text.len());

        let span = &text[heading.end()..end];
        let title = span.lines().next().unwrap_or("").trim().to_string();

        let key = heading.as_str().trim().to_string();
        sections.insert(
            key.clone(),
            Section {
                heading: key,
                letter,
                text: span.trim().to_string(),
                title,
            },
        );
    }

    SectionMap { sections }
}
