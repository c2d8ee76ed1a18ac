//! Handler for the direct SOS path (`POST /sos`).
//!
//! Unlike the check-in routes, this path derives the user strictly from the
//! verified token and never touches a check-in session.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use lifeline_core::geo::Location;
use lifeline_db::models::sos_event::{CreateSosEvent, SosEventResponse, SosStatus};
use lifeline_db::repositories::SosEventRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /sos`.
///
/// `location` is taken as raw JSON and validated by hand so that a malformed
/// payload surfaces as a 400 validation error, not a body rejection.
#[derive(Debug, Deserialize)]
pub struct SosRequest {
    #[serde(default)]
    pub location: serde_json::Value,
}

/// Response for a recorded SOS alert.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SosAlertResponse {
    pub success: bool,
    pub message: &'static str,
    pub sos_event: SosEventResponse,
}

/// POST /api/sos
///
/// Record a manual SOS alert at the given location for the authenticated
/// user. Notification fan-out to emergency contacts is not dispatched here;
/// the event is only persisted.
pub async fn trigger_sos(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SosRequest>,
) -> AppResult<(StatusCode, Json<SosAlertResponse>)> {
    let location = Location::from_json(&input.location).map_err(AppError::Core)?;

    let sos_event = SosEventRepo::create(
        &state.pool,
        &CreateSosEvent {
            user_id: Some(auth.user_id),
            location,
            status: SosStatus::Triggered,
        },
    )
    .await?;

    tracing::warn!(
        sos_event_id = sos_event.id,
        user_id = auth.user_id,
        "SOS alert triggered"
    );

    Ok((
        StatusCode::CREATED,
        Json(SosAlertResponse {
            success: true,
            message: "SOS alert triggered",
            sos_event: sos_event.into(),
        }),
    ))
}
