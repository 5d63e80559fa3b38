//! Pre-flight checks for a directory of SQL files

use std::path::{Path, PathBuf};

use crate::error::SourceError;
use crate::source::{find_sql_files, read_source_file, SourceOptions};
use crate::sql_engine::normalizer::normalize_sql;

/// Result of checking one path
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether the validation passed or failed
    pub is_valid: bool,
    /// Path that was validated
    pub path: PathBuf,
    /// List of validation errors
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a new valid result
    pub fn valid(path: PathBuf) -> Self {
        Self {
            is_valid: true,
            path,
            errors: Vec::new(),
        }
    }

    /// Create a new invalid result with errors
    pub fn invalid(path: PathBuf, errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            path,
            errors,
        }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }
}

/// Checks that a single file can be fed to the extraction engine:
/// - it can be read
/// - it is valid UTF-8
/// - something other than comments and whitespace is left after normalization
pub fn validate_sql_file(path: &Path, root: &Path) -> ValidationResult {
    let mut result = ValidationResult::valid(path.to_path_buf());

    match read_source_file(path, root) {
        Ok(source) => {
            if normalize_sql(&source.contents).is_empty() {
                result.add_error(format!(
                    "File contains no SQL after removing comments: {}",
                    path.display()
                ));
            }
        }
        Err(SourceError::Decode { .. }) => {
            result.add_error(format!("File is not valid UTF-8: {}", path.display()));
        }
        Err(SourceError::Read { source, .. }) => {
            result.add_error(format!("Failed to read {}: {}", path.display(), source));
        }
        Err(err) => {
            result.add_error(err.to_string());
        }
    }

    result
}

/// Validates every SQL file in a source directory.
///
/// A missing directory yields a single invalid result for the directory.
pub fn validate_source_directory(dir: &Path, options: &SourceOptions) -> Vec<ValidationResult> {
    let files = match find_sql_files(dir, options) {
        Ok(files) => files,
        Err(SourceError::Unavailable { .. }) => {
            return vec![ValidationResult::invalid(
                dir.to_path_buf(),
                vec![format!("Path is not a directory: {}", dir.display())],
            )];
        }
        Err(SourceError::Walk { source }) => {
            return vec![ValidationResult::invalid(
                dir.to_path_buf(),
                vec![format!("Failed to read directory {}: {}", dir.display(), source)],
            )];
        }
        Err(err) => {
            return vec![ValidationResult::invalid(
                dir.to_path_buf(),
                vec![err.to_string()],
            )];
        }
    };

    if files.is_empty() {
        return vec![ValidationResult::invalid(
            dir.to_path_buf(),
            vec![format!(
                "No files with extension(s) {} found in {}",
                options.extensions.join(", "),
                dir.display()
            )],
        )];
    }

    files
        .iter()
        .map(|path| validate_sql_file(path, dir))
        .collect()
}

#[cfg(test)]
mod tests;
