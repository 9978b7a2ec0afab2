//! Open-Meteo adapter - Implements GeocodingPort and WeatherPort using integration_weather

use application::{
    error::ApplicationError,
    ports::{GeocodingPort, WeatherPort},
};
use async_trait::async_trait;
use domain::{entities::WeatherReading, value_objects::GeoPoint};
use integration_weather::{
    ConditionsClient, LocationResolver, OpenMeteoClient, OpenMeteoGeocoder, RequestGuard,
    WeatherConfig, WeatherError,
};
use tracing::instrument;

/// Adapter for location and weather lookups against Open-Meteo
///
/// Both clients share one request guard and therefore one connection pool.
#[derive(Debug, Clone)]
pub struct OpenMeteoAdapter {
    geocoder: OpenMeteoGeocoder,
    client: OpenMeteoClient,
}

impl OpenMeteoAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(&WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: &WeatherConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;

        let guard = RequestGuard::new(config).map_err(Self::map_error)?;
        Ok(Self {
            geocoder: OpenMeteoGeocoder::with_guard(config, guard.clone()),
            client: OpenMeteoClient::with_guard(config, guard),
        })
    }

    /// The shared request guard
    #[must_use]
    pub const fn guard(&self) -> &RequestGuard {
        self.client.guard()
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::Timeout { url, timeout_secs } => {
                ApplicationError::Timeout { url, timeout_secs }
            },
            WeatherError::HttpStatus { status, url } => {
                ApplicationError::HttpStatus { status, url }
            },
            WeatherError::Network { url, message } => ApplicationError::Network { url, message },
            WeatherError::NotFound { location } => ApplicationError::NotFound { location },
            WeatherError::Configuration(message) => ApplicationError::Configuration(message),
        }
    }
}

#[async_trait]
impl GeocodingPort for OpenMeteoAdapter {
    #[instrument(skip(self))]
    async fn resolve(&self, location: &str) -> Result<GeoPoint, ApplicationError> {
        self.geocoder
            .resolve(location)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl WeatherPort for OpenMeteoAdapter {
    #[instrument(skip(self, point), fields(location = %point.canonical_name()))]
    async fn current_conditions(
        &self,
        point: &GeoPoint,
    ) -> Result<WeatherReading, ApplicationError> {
        self.client
            .fetch_conditions(point)
            .await
            .map_err(Self::map_error)
    }
}
