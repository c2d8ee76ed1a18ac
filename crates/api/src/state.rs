use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is `Copy`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: lifeline_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Process start time, for the health endpoint's uptime report.
    pub started_at: Instant,
}
