// file: src/models/document.rs
// description: decoded document model handed from ingestion to extraction
// reference: internal data structures

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Sectioned report text, one block per page.
    Report,
    /// Row-oriented export, one block per row.
    Table,
}

#[derive(Debug, Clone)]
pub struct Document {
    pub source: PathBuf,
    pub kind: DocumentKind,
    pub blocks: Vec<String>,
}

impl Document {
    pub fn new(source: impl Into<PathBuf>, kind: DocumentKind, blocks: Vec<String>) -> Self {
        Self {
            source: source.into(),
            kind,
            blocks,
        }
    }

    pub fn report(source: impl Into<PathBuf>, blocks: Vec<String>) -> Self {
        Self::new(source, DocumentKind::Report, blocks)
    }

    pub fn table(source: impl Into<PathBuf>, blocks: Vec<String>) -> Self {
        Self::new(source, DocumentKind::Table, blocks)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn full_text(&self) -> String {
        self.blocks.join("\n")
    }

    pub fn byte_len(&self) -> u64 {
        self.blocks.iter().map(|b| b.len() as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_text_joins_blocks() {
        let doc = Document::report(
            "/cases/report.txt",
            vec!["Section A: page one".to_string(), "page two".to_string()],
        );

        assert_eq!(doc.full_text(), "Section A: page one\npage two");
        assert_eq!(doc.kind, DocumentKind::Report);
        assert_eq!(doc.byte_len(), 27);
    }

    #[test]
    fn test_blank_document_is_empty() {
        let doc = Document::table("rows.csv", vec![" ".to_string(), String::new()]);
        assert!(doc.is_empty());
    }
}
