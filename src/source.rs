//! Collects SQL files from disk for the extraction engine

use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::SourceError;

/// A SQL file's text, ready for extraction
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the scanned directory
    pub relative_path: PathBuf,
    pub contents: String,
    /// Lowercase hex SHA-256 of the file bytes
    pub checksum: String,
}

/// Which files in a directory count as SQL sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
    pub extensions: Vec<String>,
    pub recursive: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["sql".to_string()],
            recursive: false,
        }
    }
}

impl SourceOptions {
    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)))
    }
}

/// Find SQL files in `dir`, sorted by path so processing order is stable.
pub fn find_sql_files(dir: &Path, options: &SourceOptions) -> Result<Vec<PathBuf>, SourceError> {
    if !dir.is_dir() {
        return Err(SourceError::Unavailable {
            path: dir.to_path_buf(),
        });
    }

    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let mut sql_files = Vec::new();

    for entry in WalkDir::new(dir)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        // `Path::is_file` follows symlinks, the walkdir entry type does not
        if !path.is_file() {
            continue;
        }
        if options.matches(path) {
            debug!(path = %path.display(), "found SQL file");
            sql_files.push(path.to_path_buf());
        } else {
            warn!(path = %path.display(), "skipping file without a SQL extension");
        }
    }

    sql_files.sort();
    Ok(sql_files)
}

/// Read one file. `root` is only used to compute the relative path.
pub fn read_source_file(path: &Path, root: &Path) -> Result<SourceFile, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let checksum = calculate_checksum(&bytes);
    let contents = String::from_utf8(bytes).map_err(|_| SourceError::Decode {
        path: path.to_path_buf(),
    })?;

    let relative_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();

    Ok(SourceFile {
        path: path.to_path_buf(),
        relative_path,
        contents,
        checksum,
    })
}

/// Find and read every SQL file in `dir`. The first unreadable file aborts the load.
pub fn load_sources(dir: &Path, options: &SourceOptions) -> Result<Vec<SourceFile>, SourceError> {
    find_sql_files(dir, options)?
        .iter()
        .map(|path| read_source_file(path, dir))
        .collect()
}

fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
