//! Domain layer for the weather agent
//!
//! Value objects and entities shared by the weather pipeline and the agent host.
//! This layer performs no I/O and defines the vocabulary of the other crates.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
