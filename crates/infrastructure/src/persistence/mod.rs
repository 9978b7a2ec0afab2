//! Persistence module
//!
//! Session memory storage, in SQLite or in process memory.

pub mod connection;
mod memory_session_store;
pub mod migrations;
mod session_store;

use std::sync::Arc;

use application::ports::SessionStore;
pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use memory_session_store::InMemorySessionStore;
pub use session_store::SqliteSessionStore;

use crate::config::{SessionBackend, SessionStoreConfig};

/// Build the configured session store
pub fn create_session_store(
    config: &SessionStoreConfig,
) -> Result<Arc<dyn SessionStore>, DatabaseError> {
    match config.backend {
        SessionBackend::Memory => Ok(Arc::new(InMemorySessionStore::new())),
        SessionBackend::Sqlite => {
            let pool = create_pool(config)?;
            Ok(Arc::new(SqliteSessionStore::new(Arc::new(pool))))
        },
    }
}
