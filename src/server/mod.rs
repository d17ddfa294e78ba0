mod handlers;
mod state;

use axum::routing::get;
use axum::Router;
use state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::upstream::OpenWeatherClient;

/// Build the API router for the given configuration.
pub fn build_router(config: &Config) -> Router {
    let client = OpenWeatherClient::new(
        &config.base_url,
        &config.api_key,
        Duration::from_secs(config.timeout_secs),
    );
    let state = Arc::new(AppState { client });

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/air-quality", get(handlers::air_quality))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn start(config: &Config) {
    let app = build_router(config);
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  Airpulse gateway listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    });
}
