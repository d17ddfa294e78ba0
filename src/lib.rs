//! Airpulse — a thin HTTP gateway over the OpenWeatherMap air-pollution API.
//!
//! Accepts a city name or a raw coordinate pair, resolves coordinates through
//! the upstream weather endpoint when needed, and merges the current and
//! forecast pollution payloads into a single JSON report.

pub mod config;
pub mod location;
pub mod report;
pub mod server;
pub mod upstream;
