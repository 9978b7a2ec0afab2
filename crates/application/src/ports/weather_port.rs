//! Weather service port
//!
//! Defines the interface for current-conditions retrieval.

use async_trait::async_trait;
use domain::{entities::WeatherReading, value_objects::GeoPoint};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions at a resolved point
    ///
    /// The reading's `location` is the point's canonical name.
    async fn current_conditions(&self, point: &GeoPoint)
    -> Result<WeatherReading, ApplicationError>;
}
