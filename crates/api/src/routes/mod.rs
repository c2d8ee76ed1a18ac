pub mod auth;
pub mod checkin;
pub mod contacts;
pub mod health;
pub mod sos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                 service + database health (public)
///
/// /auth/register          register (public)
/// /auth/login             login (public)
/// /auth/me                current user (requires auth)
/// /auth/logout            clear auth cookie (requires auth)
///
/// /contacts               list, create (requires auth)
/// /contacts/{id}          update, delete (requires auth)
///
/// /checkin/start          start a check-in timer
/// /checkin/cancel         cancel the active check-in
/// /checkin/trigger        escalate an expired check-in to SOS
///
/// /sos                    trigger a manual SOS alert (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/health", health::router())
        .nest("/auth", auth::router())
        .nest("/contacts", contacts::router())
        .nest("/checkin", checkin::router())
        .nest("/sos", sos::router())
}
