//! Application layer - Use cases and orchestration
//!
//! Contains the weather lookup, the agent tool surface and the port
//! definitions that infrastructure adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, ErrorKind};
pub use ports::*;
pub use services::*;
