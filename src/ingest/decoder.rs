// file: src/ingest/decoder.rs
// description: turns input files into ordered text blocks for extraction
// reference: page-per-block text exports and row-per-block spreadsheets

use crate::error::{ExtractError, Result};
use crate::models::Document;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};
use zip::ZipArchive;

const PAGE_BREAK: char = '\u{000C}';

/// Produces documents from one input file. Containers may yield several.
pub trait DocumentDecoder: Send + Sync {
    fn extensions(&self) -> &[&'static str];

    fn decode(&self, path: &Path) -> Result<Vec<Document>>;
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| ExtractError::FileOperation {
        path: path.to_path_buf(),
        source,
    })
}

fn read_text(path: &Path) -> Result<String> {
    String::from_utf8(read_bytes(path)?).map_err(|e| ExtractError::decode(path, e.to_string()))
}

/// Plain text, e.g. `pdftotext` output. Form feeds separate pages.
pub struct TextDecoder;

impl DocumentDecoder for TextDecoder {
    fn extensions(&self) -> &[&'static str] {
        &["txt"]
    }

    fn decode(&self, path: &Path) -> Result<Vec<Document>> {
        let content = read_text(path)?;
        let blocks: Vec<String> = content.split(PAGE_BREAK).map(str::to_string).collect();
        debug!("Decoded {} page(s) from {}", blocks.len(), path.display());
        Ok(vec![Document::report(path, blocks)])
    }
}

/// Comma-separated rows; each row becomes one block of space-joined fields.
pub struct CsvDecoder;

impl DocumentDecoder for CsvDecoder {
    fn extensions(&self) -> &[&'static str] {
        &["csv"]
    }

    fn decode(&self, path: &Path) -> Result<Vec<Document>> {
        let bytes = read_bytes(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(bytes.as_slice());

        let mut blocks = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| ExtractError::decode(path, e.to_string()))?;
            let row = record
                .iter()
                .filter(|field| !field.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            if !row.is_empty() {
                blocks.push(row);
            }
        }

        debug!("Decoded {} row(s) from {}", blocks.len(), path.display());
        Ok(vec![Document::table(path, blocks)])
    }
}

/// Text layer of a PDF report, one block per page.
pub struct PdfDecoder;

impl DocumentDecoder for PdfDecoder {
    fn extensions(&self) -> &[&'static str] {
        &["pdf"]
    }

    fn decode(&self, path: &Path) -> Result<Vec<Document>> {
        let bytes = read_bytes(path)?;
        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| ExtractError::decode(path, format!("failed to extract text: {e}")))?;

        let blocks: Vec<String> = text
            .split(PAGE_BREAK)
            .filter(|page| !page.trim().is_empty())
            .map(str::to_string)
            .collect();
        if blocks.is_empty() {
            warn!("No text layer in {}", path.display());
        }

        debug!("Decoded {} page(s) from {}", blocks.len(), path.display());
        Ok(vec![Document::report(path, blocks)])
    }
}

/// Archive of PDF reports and CSV exports. Members are staged in a scratch
/// directory and decoded one at a time; anything else is skipped.
pub struct ZipDecoder {
    members: DecoderRegistry,
}

impl ZipDecoder {
    pub fn new() -> Self {
        let mut members = DecoderRegistry::empty();
        members.register(Box::new(CsvDecoder));
        members.register(Box::new(PdfDecoder));
        Self { members }
    }

    /// Whether a member with this name is decoded rather than skipped.
    pub fn accepts_member(&self, name: &Path) -> bool {
        self.members.find(name).is_some()
    }

    fn stage_member(
        &self,
        path: &Path,
        staging: &TempDir,
        index: usize,
        member: &mut impl Read,
        name: &Path,
    ) -> Result<PathBuf> {
        let file_name = name
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let staged = staging.path().join(format!("{index}-{file_name}"));

        let mut out = File::create(&staged).map_err(|e| {
            ExtractError::container(path, format!("cannot stage {}: {e}", name.display()))
        })?;
        io::copy(member, &mut out).map_err(|e| {
            ExtractError::container(path, format!("cannot unpack {}: {e}", name.display()))
        })?;
        Ok(staged)
    }
}

impl Default for ZipDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentDecoder for ZipDecoder {
    fn extensions(&self) -> &[&'static str] {
        &["zip"]
    }

    fn decode(&self, path: &Path) -> Result<Vec<Document>> {
        let file = File::open(path).map_err(|source| ExtractError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;
        let mut archive =
            ZipArchive::new(file).map_err(|e| ExtractError::container(path, e.to_string()))?;
        let staging = TempDir::new().map_err(|e| {
            ExtractError::container(path, format!("cannot create staging directory: {e}"))
        })?;

        let mut documents = Vec::new();
        for index in 0..archive.len() {
            let mut member = archive
                .by_index(index)
                .map_err(|e| ExtractError::container(path, e.to_string()))?;
            if member.is_dir() {
                continue;
            }
            let Some(name) = member.enclosed_name() else {
                warn!("Ignoring member {} of {}: unsafe path", member.name(), path.display());
                continue;
            };
            if !self.accepts_member(&name) {
                warn!(
                    "Ignoring unsupported member {} of {}",
                    name.display(),
                    path.display()
                );
                continue;
            }

            let staged = self.stage_member(path, &staging, index, &mut member, &name)?;
            match self.members.decode(&staged) {
                Ok(decoded) => documents.extend(decoded.into_iter().map(|mut document| {
                    document.source = path.join(&name);
                    document
                })),
                Err(e) => warn!("Skipping member {} of {}: {}", name.display(), path.display(), e),
            }
        }

        debug!(
            "Decoded {} document(s) from archive {}",
            documents.len(),
            path.display()
        );
        Ok(documents)
    }
}

/// Chooses a decoder by lowercase file extension.
pub struct DecoderRegistry {
    decoders: Vec<Box<dyn DocumentDecoder>>,
}

impl DecoderRegistry {
    pub fn empty() -> Self {
        Self {
            decoders: Vec::new(),
        }
    }

    /// Later registrations win over earlier ones for the same extension.
    pub fn register(&mut self, decoder: Box<dyn DocumentDecoder>) {
        self.decoders.insert(0, decoder);
    }

    pub fn find(&self, path: &Path) -> Option<&dyn DocumentDecoder> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        self.decoders
            .iter()
            .find(|d| d.extensions().contains(&extension.as_str()))
            .map(|d| d.as_ref())
    }

    pub fn decode(&self, path: &Path) -> Result<Vec<Document>> {
        match self.find(path) {
            Some(decoder) => decoder.decode(path),
            None => Err(ExtractError::decode(path, "unsupported file type")),
        }
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(ZipDecoder::new()));
        registry.register(Box::new(PdfDecoder));
        registry.register(Box::new(CsvDecoder));
        registry.register(Box::new(TextDecoder));
        registry
    }
}
