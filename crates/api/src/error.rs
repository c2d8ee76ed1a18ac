use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lifeline_core::error::CoreError;
use serde_json::json;

use crate::config::ServerConfig;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{ "error": <message> }`
/// failure body every endpoint uses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lifeline_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}

/// Convert a persistence fault into the operation's 400 response.
///
/// Logs the full error server-side; the client sees `"Could not <op>"`,
/// with the underlying detail appended only in development.
pub fn db_fault(config: &ServerConfig, operation: &str, err: sqlx::Error) -> AppError {
    tracing::error!(error = %err, operation, "Database operation failed");

    if config.is_development() {
        AppError::BadRequest(format!("Could not {operation}: {err}"))
    } else {
        AppError::BadRequest(format!("Could not {operation}"))
    }
}
