//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: Open-Meteo lookups,
//! session memory storage, configuration loading and logging.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{AgentConfig, AppConfig, SessionBackend, SessionStoreConfig, WeatherConfig};
pub use persistence::{
    ConnectionPool, DatabaseError, InMemorySessionStore, SqliteSessionStore, create_pool,
    create_session_store,
};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
