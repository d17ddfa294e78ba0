//! Core types for location resolution.

use std::fmt;

/// Display name reported when coordinates were supplied directly.
pub const CUSTOM_LOCATION: &str = "Custom Location";

/// What the caller asked for: a named city or a raw coordinate pair.
///
/// Construction goes through [`LocationQuery::from_params`], so an
/// under-specified request never reaches the resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    City(String),
    Coords { lat: f64, lon: f64 },
}

impl LocationQuery {
    /// Build a query from raw request parameters.
    ///
    /// A blank or whitespace-only city counts as absent, and so does a
    /// half-specified coordinate pair. City wins when both forms are
    /// present. `None` means the request is under-specified.
    pub fn from_params(city: Option<&str>, lat: Option<f64>, lon: Option<f64>) -> Option<Self> {
        if let Some(city) = city {
            let trimmed = city.trim();
            if !trimmed.is_empty() {
                return Some(Self::City(trimmed.to_string()));
            }
        }
        match (lat, lon) {
            (Some(lat), Some(lon)) => Some(Self::Coords { lat, lon }),
            _ => None,
        }
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City(city) => write!(f, "city={}", city),
            Self::Coords { lat, lon } => write!(f, "lat={} lon={}", lat, lon),
        }
    }
}

/// A coordinate pair plus display name, fixed for the rest of the request.
#[derive(Debug, Clone)]
pub struct ResolvedLocation {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

/// Location resolution failures.
#[derive(Debug)]
pub enum LocationError {
    /// The city lookup failed, whatever the upstream reason.
    NotFound(String),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(city) => write!(f, "City not found: {}", city),
        }
    }
}

impl std::error::Error for LocationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_params_city() {
        let q = LocationQuery::from_params(Some("London"), None, None).unwrap();
        assert_eq!(q, LocationQuery::City("London".into()));
    }

    #[test]
    fn test_from_params_city_trimmed() {
        let q = LocationQuery::from_params(Some("  Tokyo "), None, None).unwrap();
        assert_eq!(q, LocationQuery::City("Tokyo".into()));
    }

    #[test]
    fn test_from_params_coords() {
        let q = LocationQuery::from_params(None, Some(40.7128), Some(-74.006)).unwrap();
        assert_eq!(q, LocationQuery::Coords { lat: 40.7128, lon: -74.006 });
    }

    #[test]
    fn test_from_params_city_wins_over_coords() {
        let q = LocationQuery::from_params(Some("Paris"), Some(1.0), Some(2.0)).unwrap();
        assert_eq!(q, LocationQuery::City("Paris".into()));
    }

    #[test]
    fn test_from_params_blank_city_falls_back_to_coords() {
        let q = LocationQuery::from_params(Some("  "), Some(1.0), Some(2.0)).unwrap();
        assert_eq!(q, LocationQuery::Coords { lat: 1.0, lon: 2.0 });
    }

    #[test]
    fn test_from_params_nothing() {
        assert!(LocationQuery::from_params(None, None, None).is_none());
    }

    #[test]
    fn test_from_params_partial_coords() {
        assert!(LocationQuery::from_params(None, Some(1.0), None).is_none());
        assert!(LocationQuery::from_params(None, None, Some(2.0)).is_none());
        assert!(LocationQuery::from_params(Some(""), Some(1.0), None).is_none());
    }

    #[test]
    fn test_not_found_message() {
        let err = LocationError::NotFound("Atlantis".into());
        assert_eq!(err.to_string(), "City not found: Atlantis");
    }
}
