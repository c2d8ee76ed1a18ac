//! Repository for the `emergency_contacts` table.

use lifeline_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{Contact, CreateContact, UpdateContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, phone, relationship, is_emergency_contact, \
                        created_at, updated_at";

/// Provides CRUD operations for emergency contacts.
///
/// Every lookup is scoped to the owning user so one user can never read or
/// mutate another user's contacts.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO emergency_contacts (user_id, name, phone, relationship, is_emergency_contact)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.relationship)
            .bind(input.is_emergency_contact)
            .fetch_one(pool)
            .await
    }

    /// List all contacts owned by a user, oldest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM emergency_contacts
             WHERE user_id = $1
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Patch a contact owned by `user_id`. Absent fields keep their value.
    ///
    /// Returns `None` when no such contact exists for that user.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateContact,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE emergency_contacts
             SET name = COALESCE($3, name),
                 phone = COALESCE($4, phone),
                 relationship = COALESCE($5, relationship),
                 updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.relationship)
            .fetch_optional(pool)
            .await
    }

    /// Delete a contact owned by `user_id`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM emergency_contacts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
