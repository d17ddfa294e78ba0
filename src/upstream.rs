//! OpenWeatherMap client: the "current weather by city" endpoint used for
//! geocoding, plus the two air-pollution endpoints.
//!
//! Every call is blocking and single-shot: no retries, no pooling beyond
//! what the agent provides. Pollution payloads are kept as raw JSON and
//! passed through to the caller unmodified.

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

// ─── Response types ──────────────────────────────────────────────

/// Coordinate pair as reported by the weather endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// The fields read from a "current weather by city" response. The rest of
/// the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CityWeather {
    pub coord: Coord,
    pub name: String,
}

// ─── Errors ──────────────────────────────────────────────────────

/// Upstream call failures.
#[derive(Debug)]
pub enum UpstreamError {
    /// The provider answered with a non-success status.
    Status(u16),
    Network(String),
    InvalidResponse(String),
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "upstream returned status {}", code),
            Self::Network(msg) => write!(f, "network error: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "invalid upstream response: {}", msg),
        }
    }
}

impl std::error::Error for UpstreamError {}

fn map_call_error(e: ureq::Error) -> UpstreamError {
    match e {
        ureq::Error::Status(code, _) => UpstreamError::Status(code),
        other => UpstreamError::Network(other.to_string()),
    }
}

// ─── Client ──────────────────────────────────────────────────────

/// Blocking OpenWeatherMap client. Cloning shares the underlying agent.
#[derive(Clone)]
pub struct OpenWeatherClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// A zero timeout leaves the agent unbounded.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Look up current weather for a city name. Used for its coordinate
    /// block and canonical name.
    pub fn current_weather(&self, city: &str) -> Result<CityWeather, UpstreamError> {
        let url = weather_url(&self.base_url, city, &self.api_key);
        let response = self.agent.get(&url).call().map_err(map_call_error)?;
        response
            .into_json()
            .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))
    }

    /// Current air pollution at the given coordinates, as raw JSON.
    pub fn air_pollution(&self, lat: f64, lon: f64) -> Result<serde_json::Value, UpstreamError> {
        let url = pollution_url(&self.base_url, "data/2.5/air_pollution", lat, lon, &self.api_key);
        self.fetch_json(&url)
    }

    /// Forecast air pollution at the given coordinates, as raw JSON.
    pub fn air_pollution_forecast(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<serde_json::Value, UpstreamError> {
        let url = pollution_url(
            &self.base_url,
            "data/2.5/air_pollution/forecast",
            lat,
            lon,
            &self.api_key,
        );
        self.fetch_json(&url)
    }

    fn fetch_json(&self, url: &str) -> Result<serde_json::Value, UpstreamError> {
        let response = self.agent.get(url).call().map_err(map_call_error)?;
        response
            .into_json()
            .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))
    }
}

// ─── URL construction ────────────────────────────────────────────

fn weather_url(base: &str, city: &str, key: &str) -> String {
    format!("{}/data/2.5/weather?q={}&appid={}", base, urlencode(city), key)
}

fn pollution_url(base: &str, path: &str, lat: f64, lon: f64, key: &str) -> String {
    format!("{}/{}?lat={}&lon={}&appid={}", base, path, lat, lon, key)
}

/// Minimal percent-encoding for query values (no extra dep).
pub fn urlencode(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            ' ' => "%20".to_string(),
            '&' => "%26".to_string(),
            '=' => "%3D".to_string(),
            '+' => "%2B".to_string(),
            ',' => "%2C".to_string(),
            _ if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '~' => {
                c.to_string()
            }
            _ => format!("%{:02X}", c as u32),
        })
        .collect()
}
