//! Raw Open-Meteo response shapes

use serde::Deserialize;

/// Current-condition fields requested from the forecast endpoint
pub const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,relative_humidity_2m,\
                                  wind_speed_10m,wind_gusts_10m,weather_code";

/// Geocoding search response
///
/// `results` is omitted entirely when nothing matched.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

/// One geocoding candidate
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// Forecast response, reduced to the `current` block
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current: CurrentData,
}

/// Raw current conditions
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentData {
    pub time: String,
    pub temperature_2m: f64,
    pub apparent_temperature: f64,
    pub relative_humidity_2m: f64,
    pub wind_speed_10m: f64,
    #[serde(default)]
    pub wind_gusts_10m: Option<f64>,
    /// Absent or null when the model has no interpretation for this hour
    #[serde(default)]
    pub weather_code: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocoding_without_results_key() {
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.5}"#).unwrap();
        assert!(response.results.is_none());
    }

    #[test]
    fn test_geocoding_result_without_country() {
        let json = r#"{"results": [{"latitude": 1.5, "longitude": 2.5, "name": "Somewhere"}]}"#;
        let response: GeocodingResponse = serde_json::from_str(json).unwrap();
        let results = response.results.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Somewhere");
        assert!(results[0].country.is_none());
    }

    #[test]
    fn test_current_with_null_gusts() {
        let json = r#"{
            "current": {
                "time": "2026-10-18T12:00",
                "temperature_2m": 12.3,
                "apparent_temperature": 10.1,
                "relative_humidity_2m": 81,
                "wind_speed_10m": 14.0,
                "wind_gusts_10m": null,
                "weather_code": 3
            }
        }"#;
        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        assert!(response.current.wind_gusts_10m.is_none());
        assert!((response.current.relative_humidity_2m - 81.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_current_with_null_weather_code() {
        let json = r#"{
            "current": {
                "time": "2026-10-18T12:00",
                "temperature_2m": 12.3,
                "apparent_temperature": 10.1,
                "relative_humidity_2m": 81,
                "wind_speed_10m": 14.0,
                "wind_gusts_10m": 20.5,
                "weather_code": null
            }
        }"#;
        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        assert!(response.current.weather_code.is_none());
    }

    #[test]
    fn test_current_fields_list() {
        let fields: Vec<&str> = CURRENT_FIELDS.split(',').collect();
        assert_eq!(
            fields,
            [
                "temperature_2m",
                "apparent_temperature",
                "relative_humidity_2m",
                "wind_speed_10m",
                "wind_gusts_10m",
                "weather_code"
            ]
        );
    }
}
