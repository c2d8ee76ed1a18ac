//! SOS event model and DTOs.

use lifeline_core::geo::Location;
use lifeline_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Lifecycle status of an SOS event.
///
/// Only `triggered` (direct SOS) and `auto-triggered` (check-in escalation)
/// are ever produced here; `acknowledged` and `resolved` are reachable only
/// through external responder tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "sos_status", rename_all = "kebab-case")]
pub enum SosStatus {
    Triggered,
    AutoTriggered,
    Acknowledged,
    Resolved,
}

/// An SOS event row from the `sos_events` table.
#[derive(Debug, Clone, FromRow)]
pub struct SosEvent {
    pub id: DbId,
    /// Owning user when known. NULL when an auto-triggered escalation's
    /// caller-supplied identifier does not resolve to a user row.
    pub user_id: Option<DbId>,
    pub lat: f64,
    pub lng: f64,
    pub status: SosStatus,
    pub created_at: Timestamp,
}

/// Wire shape for an SOS event: lat/lng nested under `location`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SosEventResponse {
    pub id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<DbId>,
    pub location: Location,
    pub status: SosStatus,
    pub created_at: Timestamp,
}

impl From<SosEvent> for SosEventResponse {
    fn from(event: SosEvent) -> Self {
        SosEventResponse {
            id: event.id,
            user_id: event.user_id,
            location: Location {
                lat: event.lat,
                lng: event.lng,
            },
            status: event.status,
            created_at: event.created_at,
        }
    }
}

/// DTO for recording a new SOS event.
pub struct CreateSosEvent {
    pub user_id: Option<DbId>,
    pub location: Location,
    pub status: SosStatus,
}
