//! Human-readable weather summaries
//!
//! Renders a reading as a headline followed by short bullet lines, the same
//! layout the agent is instructed to answer with.

use std::fmt::Write;

use domain::entities::WeatherReading;

/// Format a reading for display
///
/// ```text
/// Berlin, Germany - Overcast, 12.0°C
/// - Feels like 10.5°C
/// - Humidity 70%
/// - Wind 9.0 km/h, gusts 18.0 km/h
/// - Observed 2026-10-18T12:00
/// ```
#[must_use]
pub fn format_reading(reading: &WeatherReading) -> String {
    let mut out = format!(
        "{} - {}, {:.1}°C",
        reading.location, reading.conditions, reading.temperature
    );

    let _ = write!(out, "\n- Feels like {:.1}°C", reading.feels_like);
    let _ = write!(out, "\n- Humidity {:.0}%", reading.humidity);
    let _ = write!(
        out,
        "\n- Wind {:.1} km/h, gusts {:.1} km/h",
        reading.wind_speed, reading.wind_gust
    );
    let _ = write!(out, "\n- Observed {}", reading.observed_at);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading() -> WeatherReading {
        WeatherReading {
            temperature: 12.0,
            feels_like: 10.54,
            humidity: 70.0,
            wind_speed: 9.0,
            wind_gust: 18.0,
            conditions: "Overcast".to_string(),
            location: "Berlin, Germany".to_string(),
            observed_at: "2026-10-18T12:00".to_string(),
        }
    }

    #[test]
    fn headline_comes_first() {
        let text = format_reading(&reading());
        assert_eq!(
            text.lines().next(),
            Some("Berlin, Germany - Overcast, 12.0°C")
        );
    }

    #[test]
    fn full_layout() {
        assert_eq!(
            format_reading(&reading()),
            "Berlin, Germany - Overcast, 12.0°C\n\
             - Feels like 10.5°C\n\
             - Humidity 70%\n\
             - Wind 9.0 km/h, gusts 18.0 km/h\n\
             - Observed 2026-10-18T12:00"
        );
    }

    #[test]
    fn negative_temperatures() {
        let mut r = reading();
        r.temperature = -3.24;
        r.conditions = "Slight snow fall".to_string();
        let text = format_reading(&r);
        assert!(text.starts_with("Berlin, Germany - Slight snow fall, -3.2°C"));
    }
}
