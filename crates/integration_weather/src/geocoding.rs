//! Open-Meteo geocoding client
//!
//! Turns a free-text place name into a [`GeoPoint`] using the
//! [Open-Meteo geocoding API](https://open-meteo.com/en/docs/geocoding-api).
//! Only the best candidate is requested and used.

use async_trait::async_trait;
use domain::value_objects::{GeoPoint, normalize_location};
use reqwest::Url;
use tracing::{debug, info, instrument};

use crate::{
    config::WeatherConfig,
    error::WeatherError,
    guard::RequestGuard,
    models::GeocodingResponse,
};

/// Trait for location resolvers
#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Resolve a raw, user-entered location to a point
    ///
    /// The input is normalized before lookup (see [`normalize_location`]);
    /// errors quote the input as given.
    async fn resolve(&self, raw_location: &str) -> Result<GeoPoint, WeatherError>;
}

/// Open-Meteo geocoding client
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    guard: RequestGuard,
    base_url: String,
}

impl OpenMeteoGeocoder {
    /// Create a geocoder with its own request guard
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        Ok(Self::with_guard(config, RequestGuard::new(config)?))
    }

    /// Create a geocoder sharing an existing guard
    #[must_use]
    pub fn with_guard(config: &WeatherConfig, guard: RequestGuard) -> Self {
        Self {
            guard,
            base_url: config.geocoding_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The guard this client sends through
    #[must_use]
    pub const fn guard(&self) -> &RequestGuard {
        &self.guard
    }

    /// Build the search URL for a normalized name, asking for one candidate
    fn build_search_url(&self, name: &str) -> Result<Url, WeatherError> {
        Url::parse_with_params(
            &format!("{}/search", self.base_url),
            &[("name", name), ("count", "1")],
        )
        .map_err(|e| WeatherError::Configuration(format!("Invalid geocoding URL: {e}")))
    }
}

#[async_trait]
impl LocationResolver for OpenMeteoGeocoder {
    #[instrument(skip(self))]
    async fn resolve(&self, raw_location: &str) -> Result<GeoPoint, WeatherError> {
        let name = normalize_location(raw_location);
        let url = self.build_search_url(name)?;

        debug!(%name, "Geocoding location");

        let response: GeocodingResponse = self.guard.fetch_json(url).await?;

        let candidate = response
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| WeatherError::NotFound {
                location: raw_location.to_string(),
            })?;

        let point = GeoPoint::new(
            candidate.latitude,
            candidate.longitude,
            &candidate.name,
            candidate.country.as_deref(),
        );

        info!(
            location = %point.canonical_name(),
            lat = point.latitude(),
            lon = point.longitude(),
            "Resolved location"
        );

        Ok(point)
    }
}
