// file: src/pipeline/processor.rs
// description: segments one document, runs the recognizers and merges the results
// reference: segmentation -> relevant sections -> recognizers -> occurrence set

use crate::config::ExtractionConfig;
use crate::extractor::{EntityExtractor, IpShape};
use crate::models::{Category, Document, DocumentKind, Entity};
use crate::parser::{TextNormalizer, segment};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Occurrence set for a single document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    entities: BTreeSet<Entity>,
}

impl Extraction {
    pub fn entities(&self) -> &BTreeSet<Entity> {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Canonical values per category.
    pub fn values(&self, category: Category) -> BTreeSet<String> {
        self.entities
            .iter()
            .filter(|e| e.category() == category)
            .map(Entity::canonical)
            .collect()
    }

    pub fn counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for entity in &self.entities {
            *counts.entry(entity.category()).or_insert(0) += 1;
        }
        counts
    }
}

impl Extend<Entity> for Extraction {
    fn extend<I: IntoIterator<Item = Entity>>(&mut self, iter: I) {
        self.entities.extend(iter);
    }
}

pub struct ReportProcessor {
    sections: Vec<char>,
    extractor: EntityExtractor,
    normalizer: Option<TextNormalizer>,
    scan_unsectioned_tables: bool,
}

impl ReportProcessor {
    pub fn new(config: &ExtractionConfig) -> Self {
        let normalizer = if config.normalize_text {
            Some(TextNormalizer::new())
        } else {
            None
        };

        Self {
            sections: config.sections.clone(),
            extractor: EntityExtractor::from_config(config),
            normalizer,
            scan_unsectioned_tables: config.scan_unsectioned_tables,
        }
    }

    /// Pure function of `text`: relevant sections feed the section-scoped
    /// recognizers, the platform recognizer sees the whole text.
    pub fn extract(&self, text: &str) -> Extraction {
        let sections = segment(text);
        let mut extraction = Extraction::default();

        for section in sections.relevant(&self.sections) {
            let found = self.extractor.extract_section(&section.text, &IpShape::REPORT);
            debug!("{} yielded {} occurrence(s)", section.heading, found.len());
            extraction.extend(found);
        }

        extraction.extend(self.extractor.extract_platforms(text));
        extraction
    }

    /// The document's full text, normalized when `normalize_text` is set.
    pub fn prepare_text(&self, document: &Document) -> String {
        let raw = document.full_text();
        match &self.normalizer {
            Some(normalizer) => normalizer.normalize(&raw),
            None => raw,
        }
    }

    /// Extracts from the prepared text. A spreadsheet without any section
    /// heading is scanned as one section.
    pub fn process(&self, document: &Document) -> Extraction {
        let text = self.prepare_text(document);

        let unsectioned_table = self.scan_unsectioned_tables
            && document.kind == DocumentKind::Table
            && segment(&text).is_empty();

        if !unsectioned_table {
            return self.extract(&text);
        }

        debug!(
            "No section headings in {}, scanning rows directly",
            document.source.display()
        );
        let mut extraction = Extraction::default();
        extraction.extend(self.extractor.extract_section(
            &text,
            &[IpShape::Narrative, IpShape::Table, IpShape::Loose],
        ));
        extraction.extend(self.extractor.extract_platforms(&text));
        extraction
    }
}
