//! City → coordinates resolution through the upstream weather endpoint.
//!
//! Raw coordinates pass through untouched; a city name costs one upstream
//! call. Any lookup failure collapses to `NotFound` for the caller.

use super::types::{LocationError, LocationQuery, ResolvedLocation, CUSTOM_LOCATION};
use crate::upstream::OpenWeatherClient;

/// Resolve a query to a coordinate pair plus display name.
///
/// No retries: a single upstream failure fails the resolution.
pub fn resolve(
    client: &OpenWeatherClient,
    query: &LocationQuery,
) -> Result<ResolvedLocation, LocationError> {
    match query {
        LocationQuery::City(city) => match client.current_weather(city) {
            Ok(weather) => Ok(ResolvedLocation {
                lat: weather.coord.lat,
                lon: weather.coord.lon,
                display_name: weather.name,
            }),
            Err(e) => {
                eprintln!("  Warning: city lookup '{}' failed: {}", city, e);
                Err(LocationError::NotFound(city.clone()))
            }
        },
        LocationQuery::Coords { lat, lon } => Ok(ResolvedLocation {
            lat: *lat,
            lon: *lon,
            display_name: CUSTOM_LOCATION.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn dead_client() -> OpenWeatherClient {
        // Nothing listens on the discard port, so every call fails fast.
        OpenWeatherClient::new("http://127.0.0.1:9", "test-key", Duration::from_secs(1))
    }

    #[test]
    fn test_coords_pass_through() {
        let query = LocationQuery::Coords { lat: 40.7128, lon: -74.006 };
        let loc = resolve(&dead_client(), &query).unwrap();
        assert!((loc.lat - 40.7128).abs() < 1e-9);
        assert!((loc.lon + 74.006).abs() < 1e-9);
        assert_eq!(loc.display_name, CUSTOM_LOCATION);
    }

    #[test]
    fn test_city_failure_maps_to_not_found() {
        let query = LocationQuery::City("Atlantis".into());
        let err = resolve(&dead_client(), &query).unwrap_err();
        assert_eq!(err.to_string(), "City not found: Atlantis");
    }
}
