// file: src/utils/validation.rs
// description: command-line input validation helpers
// reference: input validation patterns

use crate::error::{ExtractError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    /// Inputs may be single files or directories to walk.
    pub fn validate_input_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ExtractError::Validation(format!(
                "Input does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() && !path.is_dir() {
            return Err(ExtractError::Validation(format!(
                "Input is neither a file nor a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_file_path(path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(ExtractError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }
        Ok(())
    }

    /// Output directories may not exist yet, but must not be a file.
    pub fn validate_output_dir(path: &Path) -> Result<()> {
        if path.exists() && !path.is_dir() {
            return Err(ExtractError::Validation(format!(
                "Output path exists and is not a directory: {}",
                path.display()
            )));
        }
        Ok(())
    }

    pub fn validate_content_not_empty(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(ExtractError::Validation("Content is empty".to_string()));
        }
        Ok(())
    }

    /// Truncates on a character boundary and appends `...`.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            None => text.to_string(),
            Some((cut, _)) => format!("{}...", &text[..cut]),
        }
    }
}
