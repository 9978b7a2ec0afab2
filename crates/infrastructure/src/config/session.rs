//! Session memory storage configuration.

use serde::{Deserialize, Serialize};

/// Where session memory is kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// SQLite file, survives restarts
    #[default]
    Sqlite,
    /// Process memory, lost on exit
    Memory,
}

/// Session store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStoreConfig {
    /// Storage backend (default: sqlite)
    #[serde(default)]
    pub backend: SessionBackend,

    /// Path to the SQLite database file, or `:memory:`
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Maximum number of pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_path() -> String {
    "weather-agent.db".to_string()
}

const fn default_max_connections() -> u32 {
    4
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::default(),
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl SessionStoreConfig {
    /// In-memory SQLite configuration for tests
    #[must_use]
    pub fn in_memory_sqlite() -> Self {
        Self {
            backend: SessionBackend::Sqlite,
            path: ":memory:".to_string(),
            max_connections: 1,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.backend == SessionBackend::Sqlite {
            if self.path.trim().is_empty() {
                return Err("session.path must not be empty".to_string());
            }
            if self.max_connections == 0 {
                return Err("session.max_connections must be greater than 0".to_string());
            }
        }
        Ok(())
    }
}
