// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ExtractError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub ingest: IngestConfig,
    pub extraction: ExtractionConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    pub extensions: Vec<String>,
    #[serde(default)]
    pub skip_patterns: Vec<String>,
    pub max_file_size_mb: usize,
    pub parallel_workers: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Section letters whose text feeds the section-scoped recognizers.
    pub sections: Vec<char>,
    #[serde(default)]
    pub username_labels: UsernameLabels,
    #[serde(default)]
    pub platform_field: PlatformField,
    pub normalize_text: bool,
    pub scan_unsectioned_tables: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub write_manifest: bool,
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UsernameLabels {
    #[default]
    Standard,
    /// Also records the token after `Home Email Address:`.
    Extended,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformField {
    #[default]
    Submitter,
    ChatService,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("TIPSCAN")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ExtractError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ExtractError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            ingest: IngestConfig {
                extensions: ["txt", "csv", "pdf", "zip"]
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                skip_patterns: vec![".git/*".to_string()],
                max_file_size_mb: 50,
                parallel_workers: 4,
            },
            extraction: ExtractionConfig {
                sections: vec!['A', 'B', 'C'],
                username_labels: UsernameLabels::Standard,
                platform_field: PlatformField::Submitter,
                normalize_text: true,
                scan_unsectioned_tables: true,
            },
            export: ExportConfig {
                output_dir: PathBuf::from("./exports"),
                write_manifest: false,
                pretty: true,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.ingest.parallel_workers == 0 {
            return Err(ExtractError::Config(
                "parallel_workers must be greater than 0".to_string(),
            ));
        }

        if self.extraction.sections.is_empty() {
            return Err(ExtractError::Config(
                "at least one section letter is required".to_string(),
            ));
        }

        if let Some(letter) = self
            .extraction
            .sections
            .iter()
            .find(|c| !('A'..='D').contains(*c))
        {
            return Err(ExtractError::Config(format!(
                "section letter {letter:?} is outside A-D"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.ingest.extensions, vec!["txt", "csv", "pdf", "zip"]);
    }

    #[test]
    fn test_rejects_unknown_section_letter() {
        let mut config = Config::default_config();
        config.extraction.sections = vec!['A', 'E'];
        assert!(matches!(config.validate(), Err(ExtractError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_workers() {
        let mut config = Config::default_config();
        config.ingest.parallel_workers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tipscan.toml");
        fs::write(
            &path,
            r#"
[ingest]
extensions = ["txt"]
max_file_size_mb = 5
parallel_workers = 2

[extraction]
sections = ["A", "B"]
username_labels = "extended"
platform_field = "chat_service"
normalize_text = false
scan_unsectioned_tables = false

[export]
output_dir = "out"
write_manifest = true
pretty = false
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.ingest.parallel_workers, 2);
        assert_eq!(config.extraction.sections, vec!['A', 'B']);
        assert_eq!(config.extraction.username_labels, UsernameLabels::Extended);
        assert_eq!(config.extraction.platform_field, PlatformField::ChatService);
        assert!(config.ingest.skip_patterns.is_empty());
    }
}
