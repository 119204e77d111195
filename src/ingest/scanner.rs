// file: src/ingest/scanner.rs
// description: expands input paths into candidate files with extension and size filtering
// reference: https://docs.rs/walkdir

use crate::config::IngestConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub struct FileScanner {
    config: IngestConfig,
}

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub size: u64,
}

impl FileScanner {
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Files are kept in input order; directory contents are sorted by name.
    pub fn scan_paths(&self, inputs: &[PathBuf]) -> Vec<ScannedFile> {
        let mut files = Vec::new();

        for input in inputs {
            if input.is_dir() {
                files.extend(self.scan_directory(input));
            } else if let Some(file) = self.accept(input) {
                files.push(file);
            }
        }

        info!("Found {} candidate files", files.len());
        files
    }

    pub fn scan_directory(&self, root: &Path) -> Vec<ScannedFile> {
        info!("Scanning directory: {}", root.display());

        WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| self.accept(entry.path()))
            .collect()
    }

    fn accept(&self, path: &Path) -> Option<ScannedFile> {
        if self.should_skip(path) {
            debug!("Skipping file: {}", path.display());
            return None;
        }

        if !self.has_supported_extension(path) {
            warn!("Skipped unsupported file type: {}", path.display());
            return None;
        }

        let metadata = match path.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                // still returned so the batch reports it as a failed file
                warn!("Cannot stat {}: {}", path.display(), e);
                return Some(ScannedFile {
                    path: path.to_path_buf(),
                    size: 0,
                });
            }
        };

        let size = metadata.len();
        let max_size = (self.config.max_file_size_mb as u64) * 1024 * 1024;
        if max_size > 0 && size > max_size {
            warn!(
                "Skipping large file ({} MB): {}",
                size / 1024 / 1024,
                path.display()
            );
            return None;
        }

        Some(ScannedFile {
            path: path.to_path_buf(),
            size,
        })
    }

    fn has_supported_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                self.config
                    .extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(e))
            })
            .unwrap_or(false)
    }

    fn should_skip(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.config.skip_patterns {
            if let Some(dir) = pattern.strip_suffix("/*") {
                if path.components().any(|c| c.as_os_str() == dir) {
                    return true;
                }
            } else if pattern.contains('*') {
                let pattern_without_star = pattern.replace("*.", ".");
                if path_str.ends_with(&pattern_without_star) {
                    return true;
                }
            } else if path_str.contains(pattern.as_str()) {
                return true;
            }
        }

        false
    }
}
