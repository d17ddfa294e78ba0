use crate::upstream::OpenWeatherClient;

/// Shared handler state. The client is stateless, so requests never contend.
pub struct AppState {
    pub client: OpenWeatherClient,
}
