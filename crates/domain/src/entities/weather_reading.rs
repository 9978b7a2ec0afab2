//! Current-conditions reading returned by the weather tool

use serde::{Deserialize, Serialize};

/// Normalized current weather for one resolved location
///
/// Serialized with camelCase keys, which is the shape the agent host expects
/// from the tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    /// Air temperature in °C
    pub temperature: f64,
    /// Apparent temperature in °C
    pub feels_like: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind gusts in km/h, equal to `wind_speed` when upstream has no gust value
    pub wind_gust: f64,
    /// Human-readable condition label
    pub conditions: String,
    /// Canonical name of the resolved location
    pub location: String,
    /// Upstream observation timestamp, passed through unparsed
    pub observed_at: String,
}

impl WeatherReading {
    /// True when every numeric field is a finite number
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.temperature,
            self.feels_like,
            self.humidity,
            self.wind_speed,
            self.wind_gust,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
