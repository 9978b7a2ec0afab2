//! Composition root
//!
//! Wires configuration, adapters and services into a ready agent.

use std::sync::Arc;

use application::{ApplicationError, WeatherAgent, WeatherService, WeatherTool};
use infrastructure::{AppConfig, OpenMeteoAdapter, create_session_store};
use tracing::debug;

/// Build the agent described by `config`
pub fn build_agent(config: &AppConfig) -> Result<WeatherAgent, ApplicationError> {
    config.validate().map_err(ApplicationError::Configuration)?;

    let adapter = Arc::new(OpenMeteoAdapter::with_config(&config.weather)?);
    let service = Arc::new(WeatherService::new(adapter.clone(), adapter));

    let sessions = create_session_store(&config.session).map_err(|e| {
        ApplicationError::Internal(format!("Failed to open session store: {e}"))
    })?;

    debug!(
        backend = ?config.session.backend,
        model = %config.agent.model,
        "Agent assembled"
    );

    Ok(WeatherAgent::new(
        config.agent.profile(),
        WeatherTool::new(service),
        sessions,
    ))
}

#[cfg(test)]
mod tests {
    use application::ErrorKind;
    use infrastructure::SessionBackend;

    use super::*;

    fn memory_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.session.backend = SessionBackend::Memory;
        config
    }

    #[test]
    fn builds_with_memory_backend() {
        let agent = build_agent(&memory_config()).unwrap();
        assert_eq!(agent.profile().name, "Weather Agent");
        assert_eq!(agent.profile().tools[0].id, "get-weather");
    }

    #[test]
    fn builds_with_sqlite_backend() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.session.path = dir.path().join("agent.db").to_string_lossy().into_owned();

        assert!(build_agent(&config).is_ok());
        assert!(dir.path().join("agent.db").exists());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = memory_config();
        config.weather.timeout_secs = 0;

        let err = build_agent(&config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
