// file: src/utils/validation.rs
// description: input validation helpers for dataset paths and listen settings
// reference: input validation patterns

use crate::error::{Result, SearchError};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    /// Checks that `path` resolves to an existing regular file.
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| SearchError::FileOperation {
            path: path.to_path_buf(),
            source: e,
        })?;

        if !canonical.is_file() {
            return Err(SearchError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_port(port: u16) -> Result<()> {
        if port == 0 {
            return Err(SearchError::Validation("Port cannot be 0".to_string()));
        }
        Ok(())
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &text[..idx]),
            None => text.to_string(),
        }
    }
}
