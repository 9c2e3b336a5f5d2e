//! Handlers for the `/candidates` resource (pipeline writes).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use stafflane_core::types::DbId;
use stafflane_db::models::candidate::{Candidate, EditCandidate, QuoteUpdate};

use crate::error::AppResult;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::service;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddCandidatesInput {
    #[serde(default)]
    pub project_ids: Vec<DbId>,
    pub freelancer_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct AddedResponse {
    pub added: u64,
}

/// POST /api/v1/candidates
pub async fn add(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<AddCandidatesInput>,
) -> AppResult<(StatusCode, Json<DataResponse<AddedResponse>>)> {
    let added =
        service::candidate::add_candidates(&state.pool, &input.project_ids, input.freelancer_id)
            .await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AddedResponse { added },
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct RejectInput {
    #[serde(default)]
    pub candidate_ids: Vec<DbId>,
}

#[derive(Debug, Serialize)]
pub struct RejectedResponse {
    pub rejected: u64,
}

/// POST /api/v1/candidates/reject
pub async fn reject(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<RejectInput>,
) -> AppResult<Json<DataResponse<RejectedResponse>>> {
    let rejected = service::candidate::reject_candidates(&state.pool, &input.candidate_ids).await?;
    Ok(Json(DataResponse {
        data: RejectedResponse { rejected },
    }))
}

/// PUT /api/v1/candidates/{id}
pub async fn edit(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<EditCandidate>,
) -> AppResult<Json<DataResponse<Candidate>>> {
    let candidate = service::candidate::edit_candidate(&state.pool, id, &input).await?;
    Ok(Json(DataResponse { data: candidate }))
}

/// PUT /api/v1/candidates/quote
pub async fn quote(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<QuoteUpdate>,
) -> AppResult<Json<DataResponse<Candidate>>> {
    let candidate = service::candidate::update_quote(&state.pool, &input).await?;
    Ok(Json(DataResponse { data: candidate }))
}

#[derive(Debug, Serialize)]
pub struct SentResponse {
    pub sent: usize,
}

/// POST /api/v1/candidates/bulk-email
pub async fn bulk_email(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<service::candidate::BulkEmailInput>,
) -> AppResult<Json<DataResponse<SentResponse>>> {
    let mailer = state.mailer.as_deref();
    let sent = service::candidate::bulk_email(&state.pool, mailer, &input).await?;
    Ok(Json(DataResponse {
        data: SentResponse { sent },
    }))
}
