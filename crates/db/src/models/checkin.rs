//! Check-in session model and DTOs.

use lifeline_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A check-in session row from the `checkin_sessions` table.
///
/// Serializes directly to the wire shape: `active` is `true` while the
/// session awaits confirmation, `false` once cancelled or escalated.
/// `expires_at` is fixed at creation and never updated.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinSession {
    pub id: DbId,
    /// Caller-supplied opaque identifier, not resolved against `users`.
    pub user_id: String,
    pub expires_at: Timestamp,
    pub active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a check-in session.
pub struct CreateCheckin {
    pub user_id: String,
    pub expires_at: Timestamp,
}
