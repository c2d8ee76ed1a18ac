//! Route definitions for the `/checkin` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::checkin;
use crate::state::AppState;

/// Routes mounted at `/checkin`.
///
/// ```text
/// POST /start    -> start a check-in timer
/// POST /cancel   -> cancel the active check-in
/// POST /trigger  -> escalate an expired check-in to SOS
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/start", post(checkin::start))
        .route("/cancel", post(checkin::cancel))
        .route("/trigger", post(checkin::trigger))
}
