//! Application-level errors

use std::fmt;

use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// The first five variants are the outcomes a weather lookup can end in.
/// None of them is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Input rejected before any network call
    #[error("{0}")]
    Validation(String),

    /// Upstream did not answer within the deadline
    #[error("Request to {url} timed out after {timeout_secs} seconds")]
    Timeout { url: String, timeout_secs: u64 },

    /// Upstream answered with a non-success status
    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Transport failure or unreadable response
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    /// Geocoding returned no candidate
    #[error("Location '{location}' not found")]
    NotFound { location: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Stable category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::ValidationError,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::HttpStatus { .. } => ErrorKind::HttpStatus,
            Self::Network { .. } => ErrorKind::NetworkError,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(message) => Self::Validation(message),
            other @ DomainError::InvalidSessionId(_) => Self::Validation(other.to_string()),
        }
    }
}

/// Category names reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ValidationError,
    Timeout,
    HttpStatus,
    NetworkError,
    NotFound,
    Configuration,
    Internal,
}

impl ErrorKind {
    /// Snake-case name of the category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationError => "validation_error",
            Self::Timeout => "timeout",
            Self::HttpStatus => "http_status",
            Self::NetworkError => "network_error",
            Self::NotFound => "not_found",
            Self::Configuration => "configuration",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_validation_maps_to_validation() {
        let err: ApplicationError = DomainError::validation("Location name too short").into();
        assert_eq!(
            err,
            ApplicationError::Validation("Location name too short".to_string())
        );
        assert_eq!(err.kind(), ErrorKind::ValidationError);
    }

    #[test]
    fn invalid_session_maps_to_validation() {
        let err: ApplicationError = DomainError::InvalidSessionId("a b".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::ValidationError);
        assert_eq!(err.to_string(), "Invalid session id: a b");
    }

    #[test]
    fn messages_carry_context() {
        let err = ApplicationError::HttpStatus {
            status: 502,
            url: "https://example.test/search".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 502 for https://example.test/search");

        let err = ApplicationError::NotFound {
            location: "Atlantis".to_string(),
        };
        assert_eq!(err.to_string(), "Location 'Atlantis' not found");
    }

    #[test]
    fn kind_names_are_snake_case() {
        let kinds = [
            (ErrorKind::ValidationError, "validation_error"),
            (ErrorKind::Timeout, "timeout"),
            (ErrorKind::HttpStatus, "http_status"),
            (ErrorKind::NetworkError, "network_error"),
            (ErrorKind::NotFound, "not_found"),
            (ErrorKind::Configuration, "configuration"),
            (ErrorKind::Internal, "internal"),
        ];
        for (kind, name) in kinds {
            assert_eq!(kind.as_str(), name);
            assert_eq!(serde_json::to_value(kind).unwrap(), name);
        }
    }
}
