//! Handlers for the `/auth` resource (register, login, me, logout).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lifeline_core::error::CoreError;
use lifeline_db::models::user::{CreateUser, UserResponse};
use lifeline_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create an account. Returns a token and sets the httpOnly `token` cookie.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let email = required(input.email, "email")?;
    let password = required(input.password, "password")?;
    let name = required(input.name, "name")?;

    if !email.validate_email() {
        return Err(AppError::Core(CoreError::Validation(
            "Please provide a valid email".into(),
        )));
    }

    // 1. Reject duplicate accounts up front for a friendly message.
    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::BadRequest(
            "User already exists with this email".into(),
        ));
    }

    // 2. Hash and create. A concurrent register can still hit the unique
    //    constraint, so the insert error is mapped to the same 400.
    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email,
            password_hash,
            name,
            phone: input.phone,
        },
    )
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
            AppError::BadRequest("Email already in use".into())
        }
        _ => AppError::Database(e),
    })?;

    // 3. Issue the token and set the cookie.
    let token = generate_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let cookie = token_cookie(&token, &state.config);

    let body = AuthResponse {
        success: true,
        token,
        user: user.into(),
    };

    Ok((StatusCode::CREATED, [(SET_COOKIE, cookie)], Json(body)))
}

/// POST /api/auth/login
///
/// Authenticate with email + password. Returns a token and sets the cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let (Some(email), Some(password)) = (input.email, input.password) else {
        return Err(AppError::Core(CoreError::Validation(
            "Please provide both email and password".into(),
        )));
    };

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    let password_valid = verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let token = generate_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let cookie = token_cookie(&token, &state.config);

    let body = AuthResponse {
        success: true,
        token,
        user: user.into(),
    };

    Ok(([(SET_COOKIE, cookie)], Json(body)))
}

/// GET /api/auth/me
///
/// Return the authenticated user's profile.
pub async fn me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("User not found".into())))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": UserResponse::from(user),
    })))
}

/// GET /api/auth/logout
///
/// Clear the auth cookie. The token itself stays valid until expiry; only
/// the cookie transport is torn down.
pub async fn logout(_auth: AuthUser, State(state): State<AppState>) -> impl IntoResponse {
    let cookie = clear_cookie(&state.config);

    (
        [(SET_COOKIE, cookie)],
        Json(serde_json::json!({ "success": true, "data": {} })),
    )
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Unwrap a required request field or fail with a 400 naming it.
fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Core(CoreError::Validation(format!(
            "{field} is required"
        )))),
    }
}

/// Build the httpOnly auth cookie carrying the token.
fn token_cookie(token: &str, config: &ServerConfig) -> String {
    let max_age = config.jwt.expiry_days * 24 * 60 * 60;
    let secure = if config.is_development() {
        ""
    } else {
        "; Secure"
    };
    format!("token={token}; Path=/; Max-Age={max_age}; HttpOnly; SameSite=Strict{secure}")
}

/// Build a cookie that overwrites and promptly expires the auth cookie.
fn clear_cookie(config: &ServerConfig) -> String {
    let secure = if config.is_development() {
        ""
    } else {
        "; Secure"
    };
    format!("token=none; Path=/; Max-Age=10; HttpOnly; SameSite=Strict{secure}")
}
