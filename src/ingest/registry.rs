// file: src/ingest/registry.rs
// description: session registry of already loaded files
// reference: prevents processing the same file twice within one session

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub identity: String,
}

#[derive(Debug, Clone, Default)]
pub struct LoadedFileRegistry {
    files: BTreeMap<PathBuf, LoadedFile>,
}

impl LoadedFileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical form when the path exists, so `./a.txt` and `a.txt` collide.
    pub fn key_for(path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(&Self::key_for(path))
    }

    /// Returns false if the file was already registered.
    pub fn register(&mut self, path: &Path, identity: String) -> bool {
        let key = Self::key_for(path);
        if self.files.contains_key(&key) {
            return false;
        }
        self.files.insert(
            key,
            LoadedFile {
                path: path.to_path_buf(),
                identity,
            },
        );
        true
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> impl Iterator<Item = &LoadedFile> {
        self.files.values()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_register_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tip.txt");
        fs::write(&path, "Section A:").unwrap();

        let mut registry = LoadedFileRegistry::new();
        assert!(registry.register(&path, "abc".to_string()));
        assert!(!registry.register(&path, "abc".to_string()));
        assert!(registry.contains(&path));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_equivalent_paths_collide() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tip.txt");
        fs::write(&path, "x").unwrap();
        let dotted = dir.path().join(".").join("tip.txt");

        let mut registry = LoadedFileRegistry::new();
        registry.register(&path, "abc".to_string());
        assert!(registry.contains(&dotted));
    }

    #[test]
    fn test_clear() {
        let mut registry = LoadedFileRegistry::new();
        registry.register(Path::new("missing.txt"), "abc".to_string());
        registry.clear();
        assert!(registry.is_empty());
    }
}
