//! Weather lookup service
//!
//! Validates a location, resolves it and fetches current conditions.

use std::{fmt, sync::Arc};

use domain::{entities::WeatherReading, value_objects::LocationQuery};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, WeatherPort},
};

/// Service answering "what is the weather in X"
pub struct WeatherService {
    geocoding: Arc<dyn GeocodingPort>,
    weather: Arc<dyn WeatherPort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(geocoding: Arc<dyn GeocodingPort>, weather: Arc<dyn WeatherPort>) -> Self {
        Self { geocoding, weather }
    }

    /// Current conditions for a free-text location
    ///
    /// The input is rejected before any lookup when it is shorter than 2 or
    /// longer than 80 characters after trimming. Resolution and retrieval run
    /// one after the other and the first failure is returned unchanged.
    #[instrument(skip(self))]
    pub async fn get_weather(&self, location: &str) -> Result<WeatherReading, ApplicationError> {
        let query = LocationQuery::new(location).inspect_err(|e| {
            debug!(error = %e, "Rejected location");
        })?;

        let point = self
            .geocoding
            .resolve(query.as_str())
            .await
            .inspect_err(|e| warn!(error = %e, kind = %e.kind(), "Location lookup failed"))?;

        let reading = self
            .weather
            .current_conditions(&point)
            .await
            .inspect_err(|e| warn!(error = %e, kind = %e.kind(), "Conditions lookup failed"))?;

        info!(
            location = %reading.location,
            conditions = %reading.conditions,
            "Weather lookup complete"
        );

        Ok(reading)
    }
}
