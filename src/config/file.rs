// src/config/file.rs
// File-based configuration from ~/.calculadora/config.toml

use crate::db::ConnectionMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Top-level config structure
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub database: DatabaseSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// `[database]` section
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct DatabaseSection {
    /// Database file name inside the log directory
    pub file: Option<String>,
    /// Connection handling, `shared` or `per_call`
    pub mode: Option<ConnectionMode>,
}

/// `[logging]` section
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct LoggingSection {
    /// tracing level: error, warn, info, debug, trace
    pub level: Option<String>,
}

impl FileConfig {
    /// Load config from `path`, or from ~/.calculadora/config.toml when None.
    ///
    /// A missing file yields defaults; an unparsable one is logged and ignored.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }

    /// Directory for per-user files (config.toml, .env)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".calculadora")
    }

    /// Get the default config file path
    fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }
}
