//! Weather integration error types

use thiserror::Error;

/// Errors produced by the geocoding and forecast lookups
///
/// Every variant is terminal for the current request; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The request did not complete within the configured deadline
    #[error("Request to {url} timed out after {timeout_secs} seconds")]
    Timeout {
        /// URL of the cancelled request
        url: String,
        /// The deadline that was exceeded
        timeout_secs: u64,
    },

    /// Upstream answered with a non-2xx status
    #[error("HTTP {status} for {url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Transport-level failure (DNS, refused or reset connection, unreadable body)
    #[error("Network error for {url}: {message}")]
    Network {
        /// Requested URL
        url: String,
        /// Underlying error message
        message: String,
    },

    /// The geocoder returned no candidate for the location
    #[error("Location '{location}' not found")]
    NotFound {
        /// The location text as originally supplied
        location: String,
    },

    /// HTTP client could not be built or a URL could not be formed
    #[error("Configuration error: {0}")]
    Configuration(String),
}
