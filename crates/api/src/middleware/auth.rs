//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lifeline_core::error::CoreError;
use lifeline_core::types::DbId;
use lifeline_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT carried either as a
/// `Authorization: Bearer <token>` header or a `token` cookie.
///
/// The decoded subject is resolved against the `users` table; a token whose
/// user no longer exists is rejected with 401. Use this as an extractor
/// parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .or_else(|| cookie_token(parts))
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Not authorized to access this route".into(),
                ))
            })?;

        let claims = validate_token(&token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let user = UserRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User not found".into())))?;

        Ok(AuthUser { user_id: user.id })
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_owned)
}

/// Extract the token from a `token=` cookie on the `Cookie` header.
fn cookie_token(parts: &Parts) -> Option<String> {
    let cookies = parts.headers.get("cookie").and_then(|v| v.to_str().ok())?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == "token" && !value.is_empty() && value != "none").then(|| value.to_owned())
    })
}
