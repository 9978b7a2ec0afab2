//! WMO weather code labels
//!
//! See <https://open-meteo.com/en/docs> for the code reference.

/// Label used for any code missing from [`CONDITION_LABELS`]
pub const UNKNOWN_CONDITION: &str = "Unknown";

/// WMO weather interpretation codes and their labels, ordered by code
pub const CONDITION_LABELS: &[(i64, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Foggy"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Dense freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Heavy freezing rain"),
    (71, "Slight snow fall"),
    (73, "Moderate snow fall"),
    (75, "Heavy snow fall"),
    (77, "Snow grains"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

/// Look up the label for a weather code, falling back to `"Unknown"`
#[must_use]
pub fn condition_label(code: i64) -> &'static str {
    CONDITION_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(UNKNOWN_CONDITION, |(_, label)| *label)
}
