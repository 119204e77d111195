// file: src/exporter/mod.rs
// description: export module exports
// reference: internal module structure

pub mod formatter;
pub mod json;
pub mod text;

pub use formatter::{format_category, ip_entry_instant};
pub use json::{ExportManifest, JsonExporter, MANIFEST_FILE_NAME};
pub use text::{ExportedFile, TextExporter};
