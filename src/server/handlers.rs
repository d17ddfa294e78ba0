use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::location::{self, LocationError, LocationQuery};
use crate::report::{self, AirQualityReport, ReportError};

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    detail: String,
}

/// Request-terminal errors, mapped to a status code at this boundary only.
pub(super) enum ApiError {
    InvalidRequest(String),
    NotFound(String),
    Upstream(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            Self::InvalidRequest(msg) | Self::NotFound(msg) | Self::Upstream(msg) => msg,
        };
        (status, Json(ApiErrorBody { detail })).into_response()
    }
}

impl From<LocationError> for ApiError {
    fn from(e: LocationError) -> Self {
        Self::NotFound(e.to_string())
    }
}

impl From<ReportError> for ApiError {
    fn from(e: ReportError) -> Self {
        Self::Upstream(e.to_string())
    }
}

// ─── GET /api/health ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Unconditional liveness check: no upstream dependency, no failure modes.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// ─── GET /api/air-quality ────────────────────────────────────────

#[derive(Deserialize)]
pub struct AirQualityParams {
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

pub async fn air_quality(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AirQualityParams>,
) -> Result<Json<AirQualityReport>, ApiError> {
    let start = Instant::now();

    let query = LocationQuery::from_params(params.city.as_deref(), params.lat, params.lon)
        .ok_or_else(|| {
            ApiError::InvalidRequest(
                "Either city name or coordinates (lat, lon) must be provided".to_string(),
            )
        })?;

    let resolved = location::resolve(&state.client, &query)?;
    let report = report::build_report(&state.client, &resolved)?;

    let elapsed = start.elapsed();
    eprintln!(
        "[{}] GET /api/air-quality {} -> {} ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        query,
        report.city,
        elapsed.as_secs_f64() * 1000.0,
    );

    Ok(Json(report))
}
