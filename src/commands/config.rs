use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConfigError;
use crate::source::SourceOptions;

pub const DEFAULT_CONFIG_FILE: &str = "sqldict.yaml";

/// Project configuration read from sqldict.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Name of the project
    #[serde(default = "default_name")]
    pub name: String,

    /// Directory holding the SQL files
    #[serde(default)]
    pub source_dir: Option<PathBuf>,

    /// File extensions treated as SQL
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,

    /// Output path; the extension (or directory, for csv) depends on the format
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// text, json or csv
    #[serde(default = "default_format")]
    pub format: String,

    /// Unrecognised keys, kept so newer config files still load
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

fn default_name() -> String {
    "sql_dictionary".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["sql".to_string()]
}

fn default_output() -> PathBuf {
    PathBuf::from("data_dictionary")
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            source_dir: None,
            extensions: default_extensions(),
            recursive: false,
            output: default_output(),
            format: default_format(),
            extra: HashMap::new(),
        }
    }
}

impl DictionaryConfig {
    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            extensions: self.extensions.clone(),
            recursive: self.recursive,
        }
    }
}

/// Reads the configuration file from the specified path, or looks for
/// sqldict.yaml in the current directory.
///
/// An explicit path that does not exist is an error; a missing default file
/// just yields the defaults.
pub fn read_config(config_path: Option<&Path>) -> Result<DictionaryConfig, ConfigError> {
    let (config_path, explicit) = match config_path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !config_path.exists() {
        if explicit {
            return Err(ConfigError::NotFound { path: config_path });
        }
        debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
        return Ok(DictionaryConfig::default());
    }

    let config_str = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
        path: config_path.clone(),
        source,
    })?;

    parse_config(&config_str).map_err(|source| ConfigError::Parse {
        path: config_path,
        source,
    })
}

pub fn parse_config(config_str: &str) -> Result<DictionaryConfig, serde_yaml::Error> {
    serde_yaml::from_str(config_str)
}
