// src/config/mod.rs
// Configuration layering: defaults, then config file, then environment

pub mod env;
pub mod file;

pub use env::EnvConfig;
pub use file::FileConfig;

use crate::db::ConnectionMode;
use crate::error::{CalcError, Result};
use std::path::{Path, PathBuf};
use tracing::Level;

/// Log directory used when no startup argument names one
pub const DEFAULT_LOG_DIR: &str = "./log";
/// Database file created inside the log directory
pub const DEFAULT_DB_FILE: &str = "calculadora.db";

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub db_file: String,
    pub connection_mode: ConnectionMode,
    pub log_level: Level,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_file: DEFAULT_DB_FILE.to_string(),
            connection_mode: ConnectionMode::default(),
            log_level: Level::WARN,
        }
    }
}

impl Settings {
    /// Merge file and environment layers over the defaults; env wins.
    pub fn resolve(file: FileConfig, env: EnvConfig) -> Result<Self> {
        let defaults = Self::default();

        let level = env.log_level.or(file.logging.level);
        let log_level = match level {
            Some(raw) => raw
                .trim()
                .parse::<Level>()
                .map_err(|_| CalcError::Config(format!("unknown log level: {raw}")))?,
            None => defaults.log_level,
        };

        let db_file = env
            .db_file
            .or(file.database.file)
            .unwrap_or(defaults.db_file);
        if db_file.trim().is_empty() {
            return Err(CalcError::Config("database file name is empty".into()));
        }

        Ok(Self {
            db_file,
            connection_mode: env
                .connection_mode
                .or(file.database.mode)
                .unwrap_or(defaults.connection_mode),
            log_level,
        })
    }

    /// Database file inside `log_dir`
    pub fn database_path(&self, log_dir: &Path) -> PathBuf {
        log_dir.join(&self.db_file)
    }
}
