//! Runtime configuration, assembled once at startup from CLI flags and the
//! environment.

use std::fmt;

/// Environment variable consulted when no `--api-key` flag is given.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Production upstream. Overridable so tests can point at a mock provider.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Upstream credential. Must never appear in logs or responses.
    pub api_key: String,
    pub base_url: String,
    /// Per-call upstream timeout. 0 means unbounded, matching the behavior
    /// of clients that configure no limit.
    pub timeout_secs: u64,
}

// Manual Debug so the credential cannot leak through `{:?}` formatting.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
