//! Repository for the `sos_events` table.

use sqlx::PgPool;

use crate::models::sos_event::{CreateSosEvent, SosEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, lat, lng, status, created_at";

/// Records SOS events. Events are append-only; `acknowledged`/`resolved`
/// transitions belong to external responder tooling, not this service.
pub struct SosEventRepo;

impl SosEventRepo {
    /// Insert a new SOS event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSosEvent) -> Result<SosEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO sos_events (user_id, lat, lng, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SosEvent>(&query)
            .bind(input.user_id)
            .bind(input.location.lat)
            .bind(input.location.lng)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }
}
