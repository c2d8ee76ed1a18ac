//! Handlers for the `/contacts` resource.
//!
//! All endpoints require authentication via [`AuthUser`] and are scoped to
//! the caller's own contacts.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lifeline_core::error::CoreError;
use lifeline_core::types::DbId;
use lifeline_db::models::contact::{ContactResponse, CreateContact, UpdateContact};
use lifeline_db::repositories::ContactRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Accepted `relationship` values.
const RELATIONSHIPS: [&str; 4] = ["Family", "Friend", "Colleague", "Other"];

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /contacts`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<String>,
    pub is_emergency_contact: Option<bool>,
}

/// Request body for `PUT /contacts/{id}`. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateContactRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/contacts
///
/// List the authenticated user's contacts.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ContactResponse>>> {
    let contacts = ContactRepo::list_for_user(&state.pool, auth.user_id).await?;

    Ok(Json(contacts.into_iter().map(Into::into).collect()))
}

/// POST /api/contacts
///
/// Create a contact. Name and phone are required; relationship defaults to
/// `Other`.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateContactRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let (Some(name), Some(phone)) = (input.name, input.phone) else {
        return Err(AppError::Core(CoreError::Validation(
            "Name and phone are required".into(),
        )));
    };

    let relationship = input.relationship.unwrap_or_else(|| "Other".to_string());
    validate_relationship(&relationship)?;

    let contact = ContactRepo::create(
        &state.pool,
        &CreateContact {
            user_id: auth.user_id,
            name,
            phone,
            relationship,
            is_emergency_contact: input.is_emergency_contact.unwrap_or(false),
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "message": "Contact created successfully",
            "contact": ContactResponse::from(contact),
        })),
    ))
}

/// PUT /api/contacts/{id}
///
/// Patch a contact owned by the caller. 404 when it does not exist or
/// belongs to someone else.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContactRequest>,
) -> AppResult<Json<ContactResponse>> {
    if let Some(relationship) = &input.relationship {
        validate_relationship(relationship)?;
    }

    let contact = ContactRepo::update(
        &state.pool,
        id,
        auth.user_id,
        &UpdateContact {
            name: input.name,
            phone: input.phone,
            relationship: input.relationship,
        },
    )
    .await?
    .ok_or_else(|| AppError::Core(CoreError::NotFound("Contact not found".into())))?;

    Ok(Json(contact.into()))
}

/// DELETE /api/contacts/{id}
///
/// Remove a contact owned by the caller.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = ContactRepo::delete(&state.pool, id, auth.user_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound(
            "Contact not found or not authorized".into(),
        )));
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Contact deleted successfully",
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject relationship values outside the accepted set.
fn validate_relationship(relationship: &str) -> Result<(), AppError> {
    if RELATIONSHIPS.contains(&relationship) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "relationship must be one of: {}",
            RELATIONSHIPS.join(", ")
        ))))
    }
}
