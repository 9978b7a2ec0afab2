//! Application configuration
//!
//! Settings come from an optional TOML file and `WEATHER_AGENT_*` environment
//! variables, in that order of precedence (environment wins). Nested keys use
//! a double underscore: `WEATHER_AGENT_WEATHER__TIMEOUT_SECS=5`.

mod agent;
mod session;

use std::path::Path;

pub use agent::AgentConfig;
pub use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};
pub use session::{SessionBackend, SessionStoreConfig};

use crate::telemetry::TelemetryConfig;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "weather-agent";

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "WEATHER_AGENT";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Open-Meteo endpoints and request timeout
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Agent profile
    #[serde(default)]
    pub agent: AgentConfig,

    /// Session memory storage
    #[serde(default)]
    pub session: SessionStoreConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the process environment
    ///
    /// With `path` set the file must exist. Without it `weather-agent.toml`
    /// in the working directory is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Like [`Self::load`], reading overrides from `env` instead of the process
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        self.weather
            .validate()
            .map_err(|e| format!("weather: {e}"))?;
        self.agent.validate()?;
        self.session.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn no_env() -> Option<config::Map<String, String>> {
        Some(config::Map::new())
    }

    fn env(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_sources() {
        let config = AppConfig::load_with_env(None, no_env()).unwrap();
        assert_eq!(config.weather.timeout_secs, 10);
        assert_eq!(config.agent.name, "Weather Agent");
        assert_eq!(config.session.backend, SessionBackend::Sqlite);
        assert_eq!(config.telemetry.log_filter, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(AppConfig::load_with_env(Some(&missing), no_env()).is_err());
    }

    #[test]
    fn file_values_are_read() {
        let file = write_config(
            r#"
            [weather]
            timeout_secs = 3
            geocoding_base_url = "http://localhost:9000/v1"

            [agent]
            model = "local-llm"

            [session]
            backend = "memory"

            [telemetry]
            json = true
            "#,
        );

        let config = AppConfig::load_with_env(Some(file.path()), no_env()).unwrap();
        assert_eq!(config.weather.timeout_secs, 3);
        assert_eq!(config.weather.geocoding_base_url, "http://localhost:9000/v1");
        assert_eq!(config.weather.forecast_base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.agent.model, "local-llm");
        assert_eq!(config.agent.name, "Weather Agent");
        assert_eq!(config.session.backend, SessionBackend::Memory);
        assert!(config.telemetry.json);
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_config("[weather]\ntimeout_secs = 3\n");

        let config = AppConfig::load_with_env(
            Some(file.path()),
            env(&[
                ("WEATHER_AGENT_WEATHER__TIMEOUT_SECS", "7"),
                ("WEATHER_AGENT_SESSION__PATH", "/tmp/agent.db"),
                ("WEATHER_AGENT_TELEMETRY__LOG_FILTER", "debug"),
            ]),
        )
        .unwrap();

        assert_eq!(config.weather.timeout_secs, 7);
        assert_eq!(config.session.path, "/tmp/agent.db");
        assert_eq!(config.telemetry.log_filter, "debug");
    }

    #[test]
    fn unrelated_environment_is_ignored() {
        let config =
            AppConfig::load_with_env(None, env(&[("OTHER_APP_WEATHER__TIMEOUT_SECS", "1")]))
                .unwrap();
        assert_eq!(config.weather.timeout_secs, 10);
    }

    #[test]
    fn validate_reports_section() {
        let mut config = AppConfig::default();
        config.weather.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("weather: "));
    }
}
