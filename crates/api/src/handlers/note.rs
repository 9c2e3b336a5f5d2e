//! Handlers for note edits and deletes (`/notes/...`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use stafflane_core::types::DbId;
use stafflane_db::models::note::{FreelancerNote, ProjectNote};

use crate::error::AppResult;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::service;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EditNoteInput {
    pub note: String,
}

/// PUT /api/v1/notes/project/{id}
pub async fn edit_project_note(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<EditNoteInput>,
) -> AppResult<Json<DataResponse<ProjectNote>>> {
    let note =
        service::note::edit_project_note(&state.pool, admin.admin_id, id, &input.note).await?;
    Ok(Json(DataResponse { data: note }))
}

/// DELETE /api/v1/notes/project/{id}
pub async fn delete_project_note(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    service::note::delete_project_note(&state.pool, admin.admin_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/notes/freelancer/{id}
pub async fn edit_freelancer_note(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<EditNoteInput>,
) -> AppResult<Json<DataResponse<FreelancerNote>>> {
    let note =
        service::note::edit_freelancer_note(&state.pool, admin.admin_id, id, &input.note).await?;
    Ok(Json(DataResponse { data: note }))
}

/// DELETE /api/v1/notes/freelancer/{id}
pub async fn delete_freelancer_note(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    service::note::delete_freelancer_note(&state.pool, admin.admin_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
