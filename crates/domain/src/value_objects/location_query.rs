//! Free-text location query value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated free-text place name, as typed by the user
///
/// The original text is kept verbatim so that errors can quote it back.
/// Length is checked on the trimmed text and counted in characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Minimum accepted length (after trimming)
    pub const MIN_LEN: usize = 2;
    /// Maximum accepted length (after trimming)
    pub const MAX_LEN: usize = 80;

    /// Validate a raw location string
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` when the trimmed text is shorter
    /// than [`Self::MIN_LEN`] or longer than [`Self::MAX_LEN`] characters.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let len = raw.trim().chars().count();

        if len < Self::MIN_LEN {
            return Err(DomainError::validation("Location name too short"));
        }
        if len > Self::MAX_LEN {
            return Err(DomainError::validation("Location name too long"));
        }

        Ok(Self(raw))
    }

    /// The location exactly as supplied
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LocationQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LocationQuery> for String {
    fn from(query: LocationQuery) -> Self {
        query.0
    }
}

/// Reduce a user-entered location to its main place name
///
/// Trims surrounding whitespace and, when the text contains commas, keeps only
/// the first non-empty comma-separated segment (`"New York, NY"` becomes
/// `"New York"`). If every segment is blank the trimmed text is returned as is.
///
/// This is a crude heuristic for dropping administrative suffixes, not an
/// address parser.
#[must_use]
pub fn normalize_location(input: &str) -> &str {
    let trimmed = input.trim();
    trimmed
        .split(',')
        .map(str::trim)
        .find(|segment| !segment.is_empty())
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_drops_region_suffix() {
        assert_eq!(normalize_location("New York, NY"), "New York");
    }

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize_location("  Paris  "), "Paris");
    }

    #[test]
    fn normalize_empty_is_unchanged() {
        assert_eq!(normalize_location(""), "");
    }

    #[test]
    fn normalize_skips_leading_empty_segments() {
        assert_eq!(normalize_location(" , ,Berlin, Germany"), "Berlin");
    }

    #[test]
    fn normalize_keeps_trimmed_text_when_all_segments_blank() {
        assert_eq!(normalize_location(" ,, "), ",,");
    }

    #[test]
    fn normalize_without_commas_is_just_trimmed() {
        assert_eq!(normalize_location("\tSão Paulo\n"), "São Paulo");
    }

    #[test]
    fn query_accepts_boundaries() {
        assert!(LocationQuery::new("Ax").is_ok());
        assert!(LocationQuery::new("a".repeat(80)).is_ok());
    }

    #[test]
    fn query_rejects_single_character() {
        let err = LocationQuery::new("x").unwrap_err();
        assert!(err.to_string().contains("too short"));
    }

    #[test]
    fn query_rejects_too_long() {
        let err = LocationQuery::new("a".repeat(81)).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn query_length_is_measured_after_trimming() {
        assert!(LocationQuery::new("   x   ").is_err());
        assert!(LocationQuery::new(format!("  {}  ", "a".repeat(80))).is_ok());
    }

    #[test]
    fn query_counts_characters_not_bytes() {
        // 40 two-byte characters
        assert!(LocationQuery::new("ü".repeat(40)).is_ok());
        assert!(LocationQuery::new("ü".repeat(81)).is_err());
    }

    #[test]
    fn query_keeps_original_text() {
        let query = LocationQuery::new(" New York, NY ").unwrap();
        assert_eq!(query.as_str(), " New York, NY ");
    }

    #[test]
    fn query_deserialization_validates() {
        let ok: Result<LocationQuery, _> = serde_json::from_str(r#""Berlin""#);
        assert!(ok.is_ok());

        let err: Result<LocationQuery, _> = serde_json::from_str(r#""x""#);
        assert!(err.is_err());
    }
}
