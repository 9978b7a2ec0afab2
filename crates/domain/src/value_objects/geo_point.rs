//! Resolved geographic point value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved place: coordinates plus the display name used in replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
    /// `"<name>, <country>"` or just `"<name>"`
    canonical_name: String,
}

impl GeoPoint {
    /// Create a point from geocoder output
    ///
    /// The canonical name joins `name` and `country` with `", "` when the
    /// country is present and non-empty. Coordinates are taken as given.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: &str, country: Option<&str>) -> Self {
        Self {
            latitude,
            longitude,
            canonical_name: canonical_name(name, country),
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Display name of the resolved place
    #[must_use]
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }
}

fn canonical_name(name: &str, country: Option<&str>) -> String {
    match country {
        Some(country) if !country.is_empty() => format!("{name}, {country}"),
        _ => name.to_string(),
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.4}, {:.4})",
            self.canonical_name, self.latitude, self.longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name_with_country() {
        let point = GeoPoint::new(48.8534, 2.3488, "Paris", Some("France"));
        assert_eq!(point.canonical_name(), "Paris, France");
    }

    #[test]
    fn test_canonical_name_without_country() {
        let point = GeoPoint::new(0.0, 0.0, "Null Island", None);
        assert_eq!(point.canonical_name(), "Null Island");
    }

    #[test]
    fn test_empty_country_is_treated_as_absent() {
        let point = GeoPoint::new(10.0, 10.0, "Somewhere", Some(""));
        assert_eq!(point.canonical_name(), "Somewhere");
    }

    #[test]
    fn test_accessors() {
        let point = GeoPoint::new(52.52, 13.41, "Berlin", Some("Germany"));
        assert!((point.latitude() - 52.52).abs() < f64::EPSILON);
        assert!((point.longitude() - 13.41).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display() {
        let point = GeoPoint::new(52.52, 13.41, "Berlin", Some("Germany"));
        assert_eq!(point.to_string(), "Berlin, Germany (52.5200, 13.4100)");
    }
}
