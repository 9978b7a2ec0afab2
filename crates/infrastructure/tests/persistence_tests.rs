//! Integration tests for session memory persistence
//!
//! These tests verify the stores built from configuration, as the CLI uses them.

#![allow(clippy::expect_used)]

use application::ports::SessionStore;
use domain::SessionId;
use infrastructure::{SessionBackend, SessionStoreConfig, create_session_store};
use serde_json::json;

// ============================================================================
// Test Helpers
// ============================================================================

fn session(id: &str) -> SessionId {
    SessionId::parse(id).expect("valid session id")
}

fn file_config(dir: &tempfile::TempDir) -> SessionStoreConfig {
    SessionStoreConfig {
        backend: SessionBackend::Sqlite,
        path: dir
            .path()
            .join("weather-agent.db")
            .to_string_lossy()
            .into_owned(),
        max_connections: 2,
    }
}

// ============================================================================
// SQLite backend
// ============================================================================

mod sqlite_backend_tests {
    use super::*;

    #[tokio::test]
    async fn values_persist_across_store_instances() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = file_config(&dir);

        {
            let store = create_session_store(&config).expect("store");
            store
                .set(&session("cli"), "last_location", json!("Lisbon"))
                .await
                .expect("set");
        }

        let store = create_session_store(&config).expect("store");
        let value = store
            .get(&session("cli"), "last_location")
            .await
            .expect("get");
        assert_eq!(value, Some(json!("Lisbon")));
    }

    #[tokio::test]
    async fn concurrent_sessions_do_not_interfere() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = create_session_store(&file_config(&dir)).expect("store");

        let tasks: Vec<_> = (0..6)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let s = SessionId::parse(&format!("user-{i}")).expect("valid id");
                    store.set(&s, "n", json!(i)).await.expect("set");
                    store.get(&s, "n").await.expect("get")
                })
            })
            .collect();

        for (i, task) in tasks.into_iter().enumerate() {
            let value = task.await.expect("task");
            assert_eq!(value, Some(json!(i)));
        }
    }

    #[tokio::test]
    async fn clear_and_remove() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = create_session_store(&file_config(&dir)).expect("store");
        let s = session("thread:42");

        store.set(&s, "a", json!(true)).await.expect("set");
        store.set(&s, "b", json!(null)).await.expect("set");

        assert!(store.remove(&s, "a").await.expect("remove"));
        assert_eq!(store.clear(&s).await.expect("clear"), 1);
        assert_eq!(store.clear(&s).await.expect("clear"), 0);
    }
}

// ============================================================================
// Memory backend
// ============================================================================

mod memory_backend_tests {
    use super::*;

    #[tokio::test]
    async fn memory_backend_needs_no_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = SessionStoreConfig {
            backend: SessionBackend::Memory,
            ..file_config(&dir)
        };

        let store = create_session_store(&config).expect("store");
        store
            .set(&session("m"), "k", json!({"x": [1, 2]}))
            .await
            .expect("set");

        assert_eq!(
            store.get(&session("m"), "k").await.expect("get"),
            Some(json!({"x": [1, 2]}))
        );
        assert!(!dir.path().join("weather-agent.db").exists());
    }
}
