// file: src/ingest/mod.rs
// description: file ingestion, identity hashing and loaded-file bookkeeping
// reference: internal module structure

pub mod decoder;
pub mod identity;
pub mod registry;
pub mod scanner;

pub use decoder::{
    CsvDecoder, DecoderRegistry, DocumentDecoder, PdfDecoder, TextDecoder, ZipDecoder,
};
pub use identity::file_identity;
pub use registry::{LoadedFile, LoadedFileRegistry};
pub use scanner::{FileScanner, ScannedFile};
