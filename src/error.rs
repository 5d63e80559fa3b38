//! Error types for sql_dictionary

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while collecting SQL source files.
///
/// The extraction engine itself never fails; everything here happens before
/// text reaches it.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Source directory unavailable: {path}")]
    Unavailable { path: PathBuf },

    #[error("Failed to read SQL file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SQL file is not valid UTF-8: {path}")]
    Decode { path: PathBuf },

    #[error("Failed to walk source directory")]
    Walk {
        #[from]
        source: walkdir::Error,
    },
}

/// Errors raised while loading the project configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found at: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
