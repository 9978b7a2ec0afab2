//! In-memory session store
//!
//! Implements the SessionStore port with a process-local map. Nothing
//! survives a restart.

use std::collections::HashMap;

use application::{error::ApplicationError, ports::SessionStore};
use async_trait::async_trait;
use domain::value_objects::SessionId;
use parking_lot::RwLock;
use serde_json::Value;

/// Map-backed session store
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, HashMap<String, Value>>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, session: &SessionId, key: &str) -> Result<Option<Value>, ApplicationError> {
        Ok(self
            .sessions
            .read()
            .get(session)
            .and_then(|entries| entries.get(key))
            .cloned())
    }

    async fn set_many(
        &self,
        session: &SessionId,
        entries: Vec<(String, Value)>,
    ) -> Result<(), ApplicationError> {
        self.sessions
            .write()
            .entry(session.clone())
            .or_default()
            .extend(entries);
        Ok(())
    }

    async fn remove(&self, session: &SessionId, key: &str) -> Result<bool, ApplicationError> {
        let mut sessions = self.sessions.write();
        let Some(entries) = sessions.get_mut(session) else {
            return Ok(false);
        };

        let removed = entries.remove(key).is_some();
        if entries.is_empty() {
            sessions.remove(session);
        }
        Ok(removed)
    }

    async fn clear(&self, session: &SessionId) -> Result<usize, ApplicationError> {
        Ok(self
            .sessions
            .write()
            .remove(session)
            .map_or(0, |entries| entries.len()))
    }
}
