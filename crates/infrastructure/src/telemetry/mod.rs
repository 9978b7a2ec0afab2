//! Telemetry infrastructure
//!
//! Structured logging through `tracing-subscriber`.

mod logging;

pub use logging::{TelemetryConfig, TelemetryError, build_filter, init_telemetry};
