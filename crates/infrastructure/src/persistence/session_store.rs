//! SQLite session store implementation
//!
//! Implements the SessionStore port using SQLite. Values are stored as JSON text.

use std::sync::Arc;

use application::{error::ApplicationError, ports::SessionStore};
use async_trait::async_trait;
use domain::value_objects::SessionId;
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::Value;
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// SQLite-based session store
#[derive(Debug, Clone)]
pub struct SqliteSessionStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteSessionStore {
    /// Create a new SQLite session store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Run a closure on a pooled connection off the async runtime
    async fn with_connection<T, F>(&self, f: F) -> Result<T, ApplicationError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, ApplicationError> + Send + 'static,
    {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;
            f(&conn)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

fn db_error(e: rusqlite::Error) -> ApplicationError {
    ApplicationError::Internal(format!("Database error: {e}"))
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    #[instrument(skip(self), fields(session = %session))]
    async fn get(&self, session: &SessionId, key: &str) -> Result<Option<Value>, ApplicationError> {
        let session = session.as_str().to_string();
        let key = key.to_string();

        self.with_connection(move |conn| {
            let raw: Option<String> = conn
                .query_row(
                    "SELECT value FROM session_memory WHERE session_id = ?1 AND key = ?2",
                    params![session, key],
                    |row| row.get(0),
                )
                .optional()
                .map_err(db_error)?;

            raw.map(|text| {
                serde_json::from_str(&text).map_err(|e| {
                    ApplicationError::Internal(format!("Stored value for '{key}' is not JSON: {e}"))
                })
            })
            .transpose()
        })
        .await
    }

    #[instrument(skip(self, entries), fields(session = %session, count = entries.len()))]
    async fn set_many(
        &self,
        session: &SessionId,
        entries: Vec<(String, Value)>,
    ) -> Result<(), ApplicationError> {
        let session = session.as_str().to_string();

        self.with_connection(move |conn| {
            let tx = conn.unchecked_transaction().map_err(db_error)?;
            {
                let mut stmt = tx
                    .prepare_cached(
                        "INSERT INTO session_memory (session_id, key, value)
                         VALUES (?1, ?2, ?3)
                         ON CONFLICT(session_id, key) DO UPDATE SET
                             value = excluded.value,
                             updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
                    )
                    .map_err(db_error)?;

                for (key, value) in &entries {
                    stmt.execute(params![session, key, value.to_string()])
                        .map_err(db_error)?;
                }
            }
            tx.commit().map_err(db_error)?;

            debug!(count = entries.len(), "Stored session values");
            Ok(())
        })
        .await
    }

    #[instrument(skip(self), fields(session = %session))]
    async fn remove(&self, session: &SessionId, key: &str) -> Result<bool, ApplicationError> {
        let session = session.as_str().to_string();
        let key = key.to_string();

        self.with_connection(move |conn| {
            let deleted = conn
                .execute(
                    "DELETE FROM session_memory WHERE session_id = ?1 AND key = ?2",
                    params![session, key],
                )
                .map_err(db_error)?;
            Ok(deleted > 0)
        })
        .await
    }

    #[instrument(skip(self), fields(session = %session))]
    async fn clear(&self, session: &SessionId) -> Result<usize, ApplicationError> {
        let session = session.as_str().to_string();

        self.with_connection(move |conn| {
            let deleted = conn
                .execute(
                    "DELETE FROM session_memory WHERE session_id = ?1",
                    params![session],
                )
                .map_err(db_error)?;

            debug!(deleted, "Cleared session");
            Ok(deleted)
        })
        .await
    }
}
