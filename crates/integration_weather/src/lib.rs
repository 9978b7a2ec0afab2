//! Open-Meteo weather integration
//!
//! Resolves free-text place names with the Open-Meteo geocoding API
//! (<https://open-meteo.com/en/docs/geocoding-api>) and fetches current
//! conditions from the forecast API (<https://open-meteo.com/en/docs>).
//! Neither endpoint requires an API key.
//!
//! Every HTTP call goes through a [`RequestGuard`], which applies the request
//! timeout and turns transport failures into [`WeatherError`] values.

pub mod client;
mod conditions;
mod config;
mod error;
pub mod geocoding;
mod guard;
mod models;

pub use client::{ConditionsClient, OpenMeteoClient};
pub use conditions::{CONDITION_LABELS, UNKNOWN_CONDITION, condition_label};
pub use config::WeatherConfig;
pub use error::WeatherError;
pub use geocoding::{LocationResolver, OpenMeteoGeocoder};
pub use guard::RequestGuard;
