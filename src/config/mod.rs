//! Application configuration.
//!
//! A small JSON file resolved at startup: the base data directory the
//! persistence manager writes under, and the record count used by the
//! demonstration driver. A missing file means defaults; a malformed
//! file is an error, not a silent fallback.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory dataset files are written under (default: "./data")
    #[serde(default = "default_base_data_path")]
    pub base_data_path: PathBuf,

    /// Number of sample records the demo driver builds (default: 5)
    #[serde(default = "default_test_data_count")]
    pub test_data_count: usize,
}

fn default_base_data_path() -> PathBuf {
    PathBuf::from("./data")
}

fn default_test_data_count() -> usize {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_data_path: default_base_data_path(),
            test_data_count: default_test_data_count(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a JSON file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or
    /// parsed.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };
        serde_json::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }
}
