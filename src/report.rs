//! Report aggregation: two sequential pollution calls merged with location
//! metadata into the response payload.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::location::ResolvedLocation;
use crate::upstream::{OpenWeatherClient, UpstreamError};

/// Coordinates as echoed back to the caller.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// The merged payload returned to the caller. `current` and `forecast` are
/// the raw upstream bodies, passed through unmodified.
#[derive(Debug, Clone, Serialize)]
pub struct AirQualityReport {
    pub city: String,
    pub coordinates: Coordinates,
    pub current: Value,
    pub forecast: Value,
}

/// Aggregation failures. All of these surface as HTTP 500.
#[derive(Debug)]
pub enum ReportError {
    /// Non-success status from the current-pollution endpoint.
    CurrentFetch,
    /// Non-success status from the forecast endpoint.
    ForecastFetch,
    /// Transport fault or unreadable body on either call.
    Transport(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentFetch => write!(f, "Failed to fetch air quality data"),
            Self::ForecastFetch => write!(f, "Failed to fetch forecast data"),
            Self::Transport(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for ReportError {}

/// Fetch current and forecast pollution for a resolved location and merge
/// them with its metadata.
///
/// The calls are strictly sequential; the forecast is not attempted once the
/// current fetch has failed.
pub fn build_report(
    client: &OpenWeatherClient,
    loc: &ResolvedLocation,
) -> Result<AirQualityReport, ReportError> {
    let current = client
        .air_pollution(loc.lat, loc.lon)
        .map_err(|e| fetch_error(e, ReportError::CurrentFetch))?;

    let forecast = client
        .air_pollution_forecast(loc.lat, loc.lon)
        .map_err(|e| fetch_error(e, ReportError::ForecastFetch))?;

    Ok(AirQualityReport {
        city: loc.display_name.clone(),
        coordinates: Coordinates { lat: loc.lat, lon: loc.lon },
        current,
        forecast,
    })
}

/// Non-success statuses keep the fixed per-endpoint message; transport
/// faults carry their own description.
fn fetch_error(e: UpstreamError, on_status: ReportError) -> ReportError {
    match e {
        UpstreamError::Status(_) => on_status,
        other => ReportError::Transport(other.to_string()),
    }
}
