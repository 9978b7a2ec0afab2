//! Database connection management
//!
//! Provides SQLite connection pooling via r2d2.

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::SessionStoreConfig;

/// Path that selects a private in-memory database
pub const IN_MEMORY_PATH: &str = ":memory:";

/// Database errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Failed to create database directory: {0}")]
    Directory(#[from] std::io::Error),
}

/// SQLite connection pool type alias
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Pooled connection type alias
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Create a new connection pool and bring the schema up to date
///
/// Every in-memory connection is its own database, so `:memory:` pools are
/// capped at one connection.
pub fn create_pool(config: &SessionStoreConfig) -> Result<ConnectionPool, DatabaseError> {
    let in_memory = config.path == IN_MEMORY_PATH;
    let max_connections = if in_memory {
        1
    } else {
        config.max_connections.max(1)
    };

    info!(path = %config.path, max_connections, "Creating database connection pool");

    let manager = if in_memory {
        SqliteConnectionManager::memory()
    } else {
        if let Some(parent) = Path::new(&config.path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        SqliteConnectionManager::file(&config.path)
    };

    let pool = Pool::builder()
        .max_size(max_connections)
        .build(manager.with_init(initialize_connection))?;

    {
        let conn = pool.get()?;
        crate::persistence::migrations::run_migrations(&conn)?;
    }

    debug!("Database connection pool created successfully");
    Ok(pool)
}

/// Per-connection settings
fn initialize_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        ",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_in_memory_pool() {
        let pool = create_pool(&SessionStoreConfig::in_memory_sqlite()).unwrap();
        assert_eq!(pool.max_size(), 1);
        assert!(pool.get().is_ok());
    }

    #[test]
    fn in_memory_pool_is_capped_at_one() {
        let config = SessionStoreConfig {
            max_connections: 8,
            ..SessionStoreConfig::in_memory_sqlite()
        };
        let pool = create_pool(&config).unwrap();
        assert_eq!(pool.max_size(), 1);
    }

    #[test]
    fn file_pool_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sessions.db");
        let config = SessionStoreConfig {
            path: path.to_string_lossy().into_owned(),
            ..Default::default()
        };

        let pool = create_pool(&config).unwrap();
        assert!(pool.get().is_ok());
        assert!(path.exists());
    }

    #[test]
    fn database_error_display() {
        let err = DatabaseError::Migration("version 9 unknown".to_string());
        assert!(err.to_string().contains("version 9"));
    }
}
