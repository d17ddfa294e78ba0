//! Location resolution: turns a city name or a raw coordinate pair into a
//! canonical (lat, lon, display name) triple.

pub mod resolver;
pub mod types;

pub use resolver::resolve;
pub use types::{LocationError, LocationQuery, ResolvedLocation, CUSTOM_LOCATION};
