//! Emergency contact model and DTOs.

use lifeline_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An emergency contact row from the `emergency_contacts` table.
#[derive(Debug, Clone, FromRow)]
pub struct Contact {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub phone: String,
    pub relationship: String,
    pub is_emergency_contact: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Wire shape for a contact (camelCase, no owner id).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub relationship: String,
    pub is_emergency_contact: bool,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        ContactResponse {
            id: contact.id,
            name: contact.name,
            phone: contact.phone,
            relationship: contact.relationship,
            is_emergency_contact: contact.is_emergency_contact,
        }
    }
}

/// DTO for creating a contact.
pub struct CreateContact {
    pub user_id: DbId,
    pub name: String,
    pub phone: String,
    pub relationship: String,
    pub is_emergency_contact: bool,
}

/// DTO for updating a contact. All fields optional; absent fields are kept.
pub struct UpdateContact {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<String>,
}
