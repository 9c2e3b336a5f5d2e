//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use stafflane_core::error::CoreError;
use stafflane_core::types::DbId;

use crate::auth::jwt::{validate_token, Claims, ROLE_ADMIN, ROLE_FREELANCER};
use crate::error::AppError;
use crate::state::AppState;

fn claims_from_parts(parts: &Parts, state: &AppState) -> Result<Claims, AppError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })?;

    validate_token(token, &state.config.jwt)
        .map_err(|_| AppError::Core(CoreError::Unauthorized("Invalid or expired token".into())))
}

/// Authenticated staff user, extracted from a Bearer token with the
/// `admin` role.
///
/// ```ignore
/// async fn my_handler(admin: AuthAdmin) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = admin.admin_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    /// The admin's internal database id (from `claims.sub`).
    pub admin_id: DbId,
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = claims_from_parts(parts, state)?;
        if claims.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin token required".into(),
            )));
        }
        Ok(AuthAdmin {
            admin_id: claims.sub,
        })
    }
}

/// Authenticated freelancer, extracted from a Bearer token with the
/// `freelancer` role.
#[derive(Debug, Clone)]
pub struct AuthFreelancer {
    /// The freelancer's internal database id (from `claims.sub`).
    pub freelancer_id: DbId,
}

impl FromRequestParts<AppState> for AuthFreelancer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = claims_from_parts(parts, state)?;
        if claims.role != ROLE_FREELANCER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Freelancer token required".into(),
            )));
        }
        Ok(AuthFreelancer {
            freelancer_id: claims.sub,
        })
    }
}
