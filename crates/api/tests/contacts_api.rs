//! HTTP-level integration tests for emergency contact CRUD and user scoping.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth, seed_user, token_for};
use sqlx::PgPool;

/// Create a contact via the API and return its id.
async fn create_contact(pool: &PgPool, token: &str, name: &str) -> i64 {
    let body = serde_json::json!({
        "name": name,
        "phone": "+1234567890",
        "relationship": "Family",
        "isEmergencyContact": true,
    });
    let response = post_json_auth(common::build_test_app(pool.clone()), "/api/contacts", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Contact created successfully");
    json["contact"]["id"].as_i64().expect("contact id")
}

/// Contacts are listed for their owner only.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_list_is_scoped_to_owner(pool: PgPool) {
    let (alice, _) = seed_user(&pool, "alice@test.com").await;
    let (bob, _) = seed_user(&pool, "bob@test.com").await;
    let alice_token = token_for(alice.id);
    let bob_token = token_for(bob.id);

    create_contact(&pool, &alice_token, "Mum").await;

    let response = get_auth(common::build_test_app(pool.clone()), "/api/contacts", &alice_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let contacts = json.as_array().expect("list must be an array");
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["name"], "Mum");
    assert_eq!(contacts[0]["relationship"], "Family");
    assert_eq!(contacts[0]["isEmergencyContact"], true);

    // Bob sees none of Alice's contacts.
    let response = get_auth(common::build_test_app(pool), "/api/contacts", &bob_token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

/// Name and phone are both required.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_requires_name_and_phone(pool: PgPool) {
    let (user, _) = seed_user(&pool, "u@test.com").await;
    let token = token_for(user.id);

    let body = serde_json::json!({ "name": "No Phone" });
    let response = post_json_auth(common::build_test_app(pool), "/api/contacts", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Name and phone are required");
}

/// Unknown relationship values are rejected.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_rejects_unknown_relationship(pool: PgPool) {
    let (user, _) = seed_user(&pool, "u@test.com").await;
    let token = token_for(user.id);

    let body = serde_json::json!({
        "name": "Dog",
        "phone": "+15551234",
        "relationship": "Pet",
    });
    let response = post_json_auth(common::build_test_app(pool), "/api/contacts", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Updates patch only the supplied fields and are scoped to the owner.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_own_contact(pool: PgPool) {
    let (user, _) = seed_user(&pool, "u@test.com").await;
    let token = token_for(user.id);
    let id = create_contact(&pool, &token, "Dad").await;

    let body = serde_json::json!({ "phone": "+19998887777" });
    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/contacts/{id}"),
        body,
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Dad", "unpatched field must be kept");
    assert_eq!(json["phone"], "+19998887777");
}

/// Updating another user's contact is indistinguishable from a missing one.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_foreign_contact_returns_404(pool: PgPool) {
    let (alice, _) = seed_user(&pool, "alice@test.com").await;
    let (bob, _) = seed_user(&pool, "bob@test.com").await;
    let alice_token = token_for(alice.id);
    let bob_token = token_for(bob.id);
    let id = create_contact(&pool, &alice_token, "Mum").await;

    let body = serde_json::json!({ "name": "Hijacked" });
    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/contacts/{id}"),
        body,
        &bob_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting removes the row; a repeat delete reports not found.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_contact(pool: PgPool) {
    let (user, _) = seed_user(&pool, "u@test.com").await;
    let token = token_for(user.id);
    let id = create_contact(&pool, &token, "Dad").await;

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/contacts/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let response = delete_auth(
        common::build_test_app(pool),
        &format!("/api/contacts/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Contact not found or not authorized");
}

/// Every contact route requires authentication.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contacts_require_auth(pool: PgPool) {
    let response = common::get(common::build_test_app(pool), "/api/contacts").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
