//! Open-Meteo current-conditions client
//!
//! HTTP client for the forecast endpoint of the Open-Meteo Weather API.

use async_trait::async_trait;
use domain::{entities::WeatherReading, value_objects::GeoPoint};
use reqwest::Url;
use tracing::{debug, info, instrument};

use crate::{
    conditions::{UNKNOWN_CONDITION, condition_label},
    config::WeatherConfig,
    error::WeatherError,
    guard::RequestGuard,
    models::{CURRENT_FIELDS, CurrentData, ForecastResponse},
};

/// Trait for current-conditions clients
#[async_trait]
pub trait ConditionsClient: Send + Sync {
    /// Fetch the current conditions at a resolved point
    async fn fetch_conditions(&self, point: &GeoPoint) -> Result<WeatherReading, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    guard: RequestGuard,
    base_url: String,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        Ok(Self::with_guard(config, RequestGuard::new(config)?))
    }

    /// Create a client sharing an existing guard
    #[must_use]
    pub fn with_guard(config: &WeatherConfig, guard: RequestGuard) -> Self {
        Self {
            guard,
            base_url: config.forecast_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The guard this client sends through
    #[must_use]
    pub const fn guard(&self) -> &RequestGuard {
        &self.guard
    }

    /// Build the forecast URL for the current-conditions request
    fn build_current_url(&self, latitude: f64, longitude: f64) -> Result<Url, WeatherError> {
        Url::parse_with_params(
            &format!("{}/forecast", self.base_url),
            &[
                ("latitude", latitude.to_string().as_str()),
                ("longitude", longitude.to_string().as_str()),
                ("current", CURRENT_FIELDS),
                ("timezone", "auto"),
            ],
        )
        .map_err(|e| WeatherError::Configuration(format!("Invalid forecast URL: {e}")))
    }

    /// Turn raw current data into a reading for `location`
    fn to_reading(current: CurrentData, location: &str) -> WeatherReading {
        WeatherReading {
            temperature: current.temperature_2m,
            feels_like: current.apparent_temperature,
            humidity: current.relative_humidity_2m,
            wind_speed: current.wind_speed_10m,
            wind_gust: current.wind_gusts_10m.unwrap_or(current.wind_speed_10m),
            conditions: current
                .weather_code
                .map_or(UNKNOWN_CONDITION, condition_label)
                .to_string(),
            location: location.to_string(),
            observed_at: current.time,
        }
    }
}

#[async_trait]
impl ConditionsClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = point.latitude(), lon = point.longitude()))]
    async fn fetch_conditions(&self, point: &GeoPoint) -> Result<WeatherReading, WeatherError> {
        let url = self.build_current_url(point.latitude(), point.longitude())?;

        debug!(url = %url, "Fetching current weather");

        let response: ForecastResponse = self.guard.fetch_json(url).await?;
        let reading = Self::to_reading(response.current, point.canonical_name());

        info!(
            location = %reading.location,
            temperature = reading.temperature,
            conditions = %reading.conditions,
            "Retrieved current weather"
        );

        Ok(reading)
    }
}
