// src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use crate::db::ConnectionMode;
use tracing::warn;

pub const DB_FILE_VAR: &str = "CALCULADORA_DB_FILE";
pub const CONNECTION_MODE_VAR: &str = "CALCULADORA_CONNECTION_MODE";
pub const LOG_VAR: &str = "CALCULADORA_LOG";

/// Overrides read from environment variables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvConfig {
    /// Database file name (CALCULADORA_DB_FILE)
    pub db_file: Option<String>,
    /// Connection mode (CALCULADORA_CONNECTION_MODE)
    pub connection_mode: Option<ConnectionMode>,
    /// tracing level (CALCULADORA_LOG)
    pub log_level: Option<String>,
}

impl EnvConfig {
    /// Load overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load overrides through `lookup`, filtering empty values
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let connection_mode = read(CONNECTION_MODE_VAR).and_then(|v| match v.parse::<ConnectionMode>() {
            Ok(mode) => Some(mode),
            Err(e) => {
                warn!(value = %v, error = %e, "Ignoring {}", CONNECTION_MODE_VAR);
                None
            }
        });

        Self {
            db_file: read(DB_FILE_VAR),
            connection_mode,
            log_level: read(LOG_VAR),
        }
    }
}
