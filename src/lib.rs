// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod ingest;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod store;
pub mod utils;

pub use config::{Config, ExportConfig, ExtractionConfig, IngestConfig, PlatformField, UsernameLabels};
pub use error::{ExtractError, Result};
pub use exporter::{ExportManifest, ExportedFile, JsonExporter, TextExporter, format_category};
pub use extractor::{EntityExtractor, IpShape};
pub use ingest::{
    CsvDecoder, DecoderRegistry, DocumentDecoder, FileScanner, LoadedFile, LoadedFileRegistry,
    PdfDecoder, ScannedFile, TextDecoder, ZipDecoder, file_identity,
};
pub use models::{Category, Document, DocumentKind, Entity};
pub use parser::{NormalizedTimestamp, Section, SectionMap, TextNormalizer, normalize, segment};
pub use pipeline::{
    BatchReport, Extraction, FileFailure, PipelineOrchestrator, PipelineStats, ProgressTracker,
    ReportProcessor,
};
pub use store::AggregateStore;
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let processor = ReportProcessor::new(&config.extraction);
        assert!(processor.extract("").is_empty());
        assert!(AggregateStore::new().is_empty());
    }
}
