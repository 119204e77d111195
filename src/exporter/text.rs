// file: src/exporter/text.rs
// description: writes one plain-text file per category, one entry per line
// reference: analyst-facing indicator lists

use crate::error::{ExtractError, Result};
use crate::exporter::formatter::format_category;
use crate::models::Category;
use crate::store::AggregateStore;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub category: Category,
    pub path: PathBuf,
    pub entries: usize,
}

#[derive(Debug, Clone)]
pub struct TextExporter {
    output_dir: PathBuf,
}

impl TextExporter {
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

    pub fn path_for(&self, category: Category) -> PathBuf {
        self.output_dir.join(format!("{}.txt", category.as_str()))
    }

    /// Writes all six categories, including empty ones.
    pub fn export_all(&self, store: &AggregateStore) -> Result<Vec<ExportedFile>> {
        info!("Starting text export to {}", self.output_dir.display());

        Category::ALL
            .into_iter()
            .map(|category| self.export_category(store, category))
            .collect()
    }

    pub fn export_category(
        &self,
        store: &AggregateStore,
        category: Category,
    ) -> Result<ExportedFile> {
        let path = self.path_for(category);
        let lines = format_category(category, &store.snapshot(category));

        write_lines(&path, &lines).map_err(|source| ExtractError::FileOperation {
            path: path.clone(),
            source,
        })?;

        info!("Exported {} items to {}", lines.len(), path.display());

        Ok(ExportedFile {
            category,
            path,
            entries: lines.len(),
        })
    }
}

fn write_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}
