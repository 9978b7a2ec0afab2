//! Value Objects - Immutable, identity-less domain primitives

mod geo_point;
mod location_query;
mod session_id;

pub use geo_point::GeoPoint;
pub use location_query::{LocationQuery, normalize_location};
pub use session_id::SessionId;
