//! Session memory port
//!
//! Per-session key-value storage for the agent host. Values are arbitrary
//! JSON so the agent can keep whatever it needs between turns.

use async_trait::async_trait;
use domain::value_objects::SessionId;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;

use crate::error::ApplicationError;

/// Port for session memory persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read one entry
    async fn get(&self, session: &SessionId, key: &str) -> Result<Option<Value>, ApplicationError>;

    /// Insert or replace several entries at once
    ///
    /// Either every entry is written or none is.
    async fn set_many(
        &self,
        session: &SessionId,
        entries: Vec<(String, Value)>,
    ) -> Result<(), ApplicationError>;

    /// Insert or replace one entry
    async fn set(
        &self,
        session: &SessionId,
        key: &str,
        value: Value,
    ) -> Result<(), ApplicationError> {
        self.set_many(session, vec![(key.to_string(), value)]).await
    }

    /// Delete one entry, returning whether it existed
    async fn remove(&self, session: &SessionId, key: &str) -> Result<bool, ApplicationError>;

    /// Delete every entry of a session, returning how many were removed
    async fn clear(&self, session: &SessionId) -> Result<usize, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn SessionStore) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SessionStore>();
    }
}
