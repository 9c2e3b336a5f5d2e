//! HTTP error mapping for the staffing API.
//!
//! Handlers return [`AppError`], which renders the shared
//! `{"error", "code"}` JSON envelope. Domain failures arrive as
//! [`CoreError`]; database failures are classified so that unique
//! violations on the schema's `uq_*` constraints surface as 409s with a
//! message naming the staffing rule that was broken, instead of leaking
//! a raw Postgres error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use stafflane_core::error::CoreError;

/// Application-level error for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error (validation, not-found, note permission...).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// `RowNotFound` maps to 404; Postgres unique violations (SQLSTATE
/// 23505) on a `uq_*` constraint map to 409 via [`conflict_message`];
/// everything else is a sanitized 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some("23505") {
                if let Some(constraint) = db_err.constraint().filter(|c| c.starts_with("uq_")) {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        conflict_message(constraint),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            internal_error()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error()
        }
    }
}

/// Human-readable message for a violated unique constraint.
///
/// Maps the schema's `uq_*` constraints on membership, attribute,
/// feedback, candidate, and account rows; anything without a mapping
/// falls through to a generic message naming the constraint.
fn conflict_message(constraint: &str) -> String {
    match constraint {
        "uq_project_member" => "Team member is already on this project".to_string(),
        "uq_project_director" => "Director is already assigned to this project".to_string(),
        "uq_project_stakeholder" => "Stakeholder is already attached to this project".to_string(),
        "uq_project_attribute" => "Attribute is already attached to this project".to_string(),
        "uq_project_scale" | "uq_project_criteria" => {
            "Feedback selection is already attached to this project".to_string()
        }
        "uq_project_candidate" => {
            "Freelancer is already a candidate on this project".to_string()
        }
        "uq_admin_email" | "uq_freelancer_email" => {
            "Email address is already registered".to_string()
        }
        other => format!("Duplicate value violates unique constraint: {other}"),
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
