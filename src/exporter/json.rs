// file: src/exporter/json.rs
// description: json manifest describing one export run
// reference: https://docs.rs/serde_json

use crate::error::{ExtractError, Result};
use crate::exporter::formatter::format_category;
use crate::ingest::LoadedFile;
use crate::models::Category;
use crate::pipeline::FileFailure;
use crate::store::AggregateStore;
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

pub const MANIFEST_FILE_NAME: &str = "manifest.json";

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportManifest {
    pub run_id: Uuid,
    pub exported_at: String,
    pub loaded_files: Vec<LoadedFile>,
    pub failures: Vec<FileFailure>,
    pub counts: BTreeMap<Category, usize>,
    /// Formatted entries, in the same order as the text export.
    pub entries: BTreeMap<Category, Vec<String>>,
}

impl ExportManifest {
    pub fn build<'a>(
        store: &AggregateStore,
        loaded_files: impl IntoIterator<Item = &'a LoadedFile>,
        failures: &[FileFailure],
    ) -> Self {
        let entries: BTreeMap<Category, Vec<String>> = Category::ALL
            .into_iter()
            .map(|category| (category, format_category(category, &store.snapshot(category))))
            .collect();

        Self {
            run_id: Uuid::new_v4(),
            exported_at: Utc::now().to_rfc3339(),
            loaded_files: loaded_files.into_iter().cloned().collect(),
            failures: failures.to_vec(),
            counts: store.counts(),
            entries,
        }
    }

    pub fn total_entries(&self) -> usize {
        self.counts.values().sum()
    }
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| ExtractError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn write_manifest(&self, manifest: &ExportManifest, pretty: bool) -> Result<PathBuf> {
        let path = self.output_dir.join(MANIFEST_FILE_NAME);
        let json = if pretty {
            serde_json::to_string_pretty(manifest)?
        } else {
            serde_json::to_string(manifest)?
        };

        fs::write(&path, json).map_err(|source| ExtractError::FileOperation {
            path: path.clone(),
            source,
        })?;

        info!(
            "Wrote manifest for run {} ({} entries) to {}",
            manifest.run_id,
            manifest.total_entries(),
            path.display()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_exporter_creation() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("nested"));
        assert!(exporter.is_ok());
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_manifest_contents() {
        let mut store = AggregateStore::new();
        store.insert(Category::Ips, "10.0.0.1 → 2023-01-02 10:00:00");
        store.insert(Category::Ips, "10.0.0.2 → 2022-12-31 09:00:00");
        store.insert(Category::Usernames, "agent007");

        let loaded = vec![LoadedFile {
            path: PathBuf::from("tip.txt"),
            identity: "abc".to_string(),
        }];
        let failures = vec![FileFailure {
            path: PathBuf::from("broken.pdf"),
            message: "no decoder".to_string(),
        }];

        let manifest = ExportManifest::build(&store, &loaded, &failures);
        assert_eq!(manifest.total_entries(), 3);
        assert_eq!(
            manifest.entries[&Category::Ips],
            vec![
                "10.0.0.2 → 2022-12-31 09:00:00".to_string(),
                "10.0.0.1 → 2023-01-02 10:00:00".to_string(),
            ]
        );
        assert!(manifest.entries[&Category::Hashes].is_empty());

        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();
        let path = exporter.write_manifest(&manifest, true).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["counts"]["usernames"], 1);
        assert_eq!(value["loaded_files"][0]["identity"], "abc");
        assert_eq!(value["failures"][0]["message"], "no decoder");
    }
}
