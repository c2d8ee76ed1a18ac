//! Route definition for the direct SOS path.

use axum::routing::post;
use axum::Router;

use crate::handlers::sos;
use crate::state::AppState;

/// Routes mounted at `/sos`.
///
/// ```text
/// POST /  -> trigger a manual SOS alert (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(sos::trigger_sos))
}
