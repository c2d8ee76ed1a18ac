//! Handlers for the `/checkin` resource: the check-in state machine.
//!
//! A session moves `ACTIVE -> RESOLVED` exactly once, through cancel or
//! trigger. The server is the authority on expiry: trigger re-checks the
//! persisted deadline against the database clock, so a stale or manipulated
//! client cannot forge an escalation. A cancel that lands between the
//! client's local expiry and its trigger call wins, and the trigger fails
//! with the usual "no expired check-in" message.
//!
//! These routes take the body's `userId` at face value, without verifying it
//! against an authenticated caller. TriggerSOS (`handlers::sos`) does the
//! opposite. See DESIGN.md on this trust boundary.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use lifeline_core::checkin::{expiry_deadline, validate_duration_minutes};
use lifeline_core::error::CoreError;
use lifeline_core::geo::Location;
use lifeline_core::types::DbId;
use lifeline_db::models::checkin::{CheckinSession, CreateCheckin};
use lifeline_db::models::sos_event::{CreateSosEvent, SosEventResponse, SosStatus};
use lifeline_db::repositories::{CheckinRepo, SosEventRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::{db_fault, AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /checkin/start`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRequest {
    pub user_id: Option<String>,
    pub duration_minutes: Option<f64>,
    #[serde(default)]
    pub location: serde_json::Value,
}

/// Request body for `POST /checkin/cancel`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRequest {
    pub user_id: Option<String>,
}

/// Request body for `POST /checkin/trigger`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerRequest {
    pub user_id: Option<String>,
    #[serde(default)]
    pub location: serde_json::Value,
}

/// Response carrying a message and the affected session.
#[derive(Debug, Serialize)]
pub struct CheckinResponse {
    pub message: &'static str,
    pub checkin: CheckinSession,
}

/// Response for a successful escalation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerResponse {
    pub message: &'static str,
    pub sos_event: SosEventResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/checkin/start
///
/// Create a new active session with `expiresAt = now + durationMinutes`.
/// Does not check for existing active sessions; starting twice leaves two
/// active rows (current behavior, see DESIGN.md).
pub async fn start(
    State(state): State<AppState>,
    Json(input): Json<StartRequest>,
) -> AppResult<(StatusCode, Json<CheckinResponse>)> {
    let user_id = required_user_id(input.user_id)?;

    let duration_minutes = input.duration_minutes.ok_or_else(|| {
        AppError::Core(CoreError::Validation("durationMinutes is required".into()))
    })?;
    validate_duration_minutes(duration_minutes).map_err(AppError::Core)?;

    // Validated but not persisted: a session stores only its deadline.
    Location::from_json(&input.location).map_err(AppError::Core)?;

    let checkin = CheckinRepo::create(
        &state.pool,
        &CreateCheckin {
            user_id,
            expires_at: expiry_deadline(Utc::now(), duration_minutes),
        },
    )
    .await
    .map_err(|e| db_fault(&state.config, "start check-in", e))?;

    tracing::info!(checkin_id = checkin.id, "Check-in started");

    Ok((
        StatusCode::CREATED,
        Json(CheckinResponse {
            message: "Check-in started",
            checkin,
        }),
    ))
}

/// POST /api/checkin/cancel
///
/// Resolve the caller's active session without escalation. 404 when there
/// is none; a second cancel for the same user fails the same way.
pub async fn cancel(
    State(state): State<AppState>,
    Json(input): Json<CancelRequest>,
) -> AppResult<Json<CheckinResponse>> {
    let user_id = required_user_id(input.user_id)?;

    let checkin = CheckinRepo::cancel_active(&state.pool, &user_id)
        .await
        .map_err(|e| db_fault(&state.config, "cancel check-in", e))?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("No active check-in found".into())))?;

    tracing::info!(checkin_id = checkin.id, "Check-in cancelled");

    Ok(Json(CheckinResponse {
        message: "Check-in cancelled",
        checkin,
    }))
}

/// POST /api/checkin/trigger
///
/// Escalate an expired, unconfirmed session into an SOS event.
///
/// The session must be active AND past its deadline by the database clock;
/// a missing session and a not-yet-expired one produce the same 400, by
/// contract. On success the session is deactivated and an `auto-triggered`
/// event is recorded with the supplied location.
pub async fn trigger(
    State(state): State<AppState>,
    Json(input): Json<TriggerRequest>,
) -> AppResult<(StatusCode, Json<TriggerResponse>)> {
    let user_id = required_user_id(input.user_id)?;
    let location = Location::from_json(&input.location).map_err(AppError::Core)?;

    let checkin = CheckinRepo::trigger_expired(&state.pool, &user_id)
        .await
        .map_err(|e| db_fault(&state.config, "trigger auto-SOS", e))?
        .ok_or_else(|| {
            AppError::BadRequest("No expired check-in to trigger SOS".into())
        })?;

    let sos_event = SosEventRepo::create(
        &state.pool,
        &CreateSosEvent {
            user_id: resolve_user_id(&state, &user_id).await?,
            location,
            status: SosStatus::AutoTriggered,
        },
    )
    .await
    .map_err(|e| db_fault(&state.config, "trigger auto-SOS", e))?;

    tracing::warn!(
        checkin_id = checkin.id,
        sos_event_id = sos_event.id,
        "Expired check-in escalated to SOS"
    );

    Ok((
        StatusCode::CREATED,
        Json(TriggerResponse {
            message: "Auto-SOS triggered",
            sos_event: sos_event.into(),
        }),
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Unwrap the body's `userId` or fail with a 400.
fn required_user_id(user_id: Option<String>) -> Result<String, AppError> {
    match user_id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(AppError::Core(CoreError::Validation(
            "userId is required".into(),
        ))),
    }
}

/// Resolve the session's opaque user identifier to a `users` row id.
///
/// The identifier is caller-supplied and never verified at start time, so
/// it may not name a real user; the event's `userId` stays null then.
async fn resolve_user_id(state: &AppState, user_id: &str) -> Result<Option<DbId>, AppError> {
    let Ok(id) = user_id.parse::<DbId>() else {
        return Ok(None);
    };

    let user = UserRepo::find_by_id(&state.pool, id).await?;
    Ok(user.map(|u| u.id))
}
