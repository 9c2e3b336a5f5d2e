//! Handlers for freelancer-scoped reads and notes.
//!
//! `/freelancers/{id}/...` requires an admin token; `/freelancer/projects`
//! serves a freelancer their own project history.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use stafflane_core::types::DbId;
use stafflane_db::models::note::FreelancerNote;

use crate::error::AppResult;
use crate::middleware::auth::{AuthAdmin, AuthFreelancer};
use crate::response::DataResponse;
use crate::service;
use crate::state::AppState;
use crate::views;

/// GET /api/v1/freelancers/{id}/projects
pub async fn projects(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<views::FreelancerProject>>>> {
    let projects = views::freelancer_projects(&state.pool, id).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/freelancer/projects
///
/// A freelancer token only ever sees its own mappings.
pub async fn own_projects(
    State(state): State<AppState>,
    freelancer: AuthFreelancer,
) -> AppResult<Json<DataResponse<Vec<views::FreelancerProject>>>> {
    let projects = views::freelancer_projects(&state.pool, freelancer.freelancer_id).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/freelancers/{id}/notes
pub async fn notes(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<views::NoteView>>>> {
    let notes = views::freelancer_notes(&state.pool, id).await?;
    Ok(Json(DataResponse { data: notes }))
}

#[derive(Debug, Deserialize)]
pub struct FreelancerNoteInput {
    pub note: String,
    pub project_id: Option<DbId>,
}

/// POST /api/v1/freelancers/{id}/notes
pub async fn add_note(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<FreelancerNoteInput>,
) -> AppResult<(StatusCode, Json<DataResponse<FreelancerNote>>)> {
    let note = service::note::add_freelancer_note(
        &state.pool,
        admin.admin_id,
        id,
        input.project_id,
        &input.note,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}
