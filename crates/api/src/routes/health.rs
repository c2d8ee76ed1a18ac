use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use lifeline_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Current server time.
    pub timestamp: Timestamp,
    /// Seconds since process start.
    pub uptime: u64,
    /// Deployment environment.
    pub environment: String,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /api/health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = lifeline_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status,
        timestamp: Utc::now(),
        uptime: state.started_at.elapsed().as_secs(),
        environment: state.config.environment.clone(),
        db_healthy,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount health check routes (nested under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}
