//! Geocoding port
//!
//! Resolves free-text place names to coordinates.

use async_trait::async_trait;
use domain::value_objects::GeoPoint;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for location resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a user-entered location to its best match
    ///
    /// `location` is passed as the user typed it; implementations normalize
    /// it and report [`ApplicationError::NotFound`] with the same text.
    async fn resolve(&self, location: &str) -> Result<GeoPoint, ApplicationError>;
}
