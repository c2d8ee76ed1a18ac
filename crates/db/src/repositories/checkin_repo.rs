//! Repository for the `checkin_sessions` table.
//!
//! Cancel and trigger are single conditional `UPDATE ... RETURNING`
//! statements: the `active = true` predicate (and for trigger, the
//! server-clock expiry check) is baked into the write, so two racing calls
//! can never both observe and resolve the same session. The inner subselect
//! picks the oldest active session when a user has more than one; the outer
//! predicates re-check it, so a loser of the race simply matches zero rows.

use lifeline_core::types::DbId;
use sqlx::PgPool;

use crate::models::checkin::{CheckinSession, CreateCheckin};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, expires_at, active, created_at";

/// Provides lifecycle operations for check-in sessions.
pub struct CheckinRepo;

impl CheckinRepo {
    /// Insert a new active session, returning the created row.
    ///
    /// Does not check for existing active sessions; a user can hold several
    /// concurrently (see DESIGN.md on the missing uniqueness constraint).
    pub async fn create(
        pool: &PgPool,
        input: &CreateCheckin,
    ) -> Result<CheckinSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO checkin_sessions (user_id, expires_at)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CheckinSession>(&query)
            .bind(&input.user_id)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Atomically deactivate the user's oldest active session.
    ///
    /// Returns the updated row, or `None` when the user has no active
    /// session (including when a concurrent cancel or trigger already
    /// resolved it).
    pub async fn cancel_active(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Option<CheckinSession>, sqlx::Error> {
        let query = format!(
            "UPDATE checkin_sessions SET active = FALSE
             WHERE active = TRUE
               AND id = (SELECT id FROM checkin_sessions
                          WHERE user_id = $1 AND active = TRUE
                          ORDER BY created_at, id
                          LIMIT 1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CheckinSession>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Atomically deactivate the user's oldest active session, but only if
    /// it has expired by the database clock.
    ///
    /// Returns `None` when there is no active session or the oldest one has
    /// not reached its deadline; the caller cannot distinguish the two, by
    /// contract.
    pub async fn trigger_expired(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Option<CheckinSession>, sqlx::Error> {
        let query = format!(
            "UPDATE checkin_sessions SET active = FALSE
             WHERE active = TRUE
               AND expires_at <= NOW()
               AND id = (SELECT id FROM checkin_sessions
                          WHERE user_id = $1 AND active = TRUE
                          ORDER BY created_at, id
                          LIMIT 1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CheckinSession>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a session by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CheckinSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM checkin_sessions WHERE id = $1");
        sqlx::query_as::<_, CheckinSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
