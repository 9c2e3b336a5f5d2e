//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use stafflane_core::candidate::StageCount;
use stafflane_core::types::DbId;
use stafflane_db::models::admin::Admin;
use stafflane_db::models::client::ProjectClientMap;
use stafflane_db::models::location::{ProjectLocation, UpsertLocation};
use stafflane_db::models::note::ProjectNote;
use stafflane_db::models::project::MasterProject;
use stafflane_db::models::resourcing::{ProjectResourcing, UpsertResourcing};
use stafflane_db::models::scope::ScopeLinkInput;
use stafflane_db::models::search::AutocompleteHit;
use stafflane_db::repositories::location_repo::LocationRepo;
use stafflane_db::repositories::membership_repo::MembershipRepo;
use stafflane_db::repositories::resourcing_repo::ResourcingRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::service;
use crate::state::AppState;
use crate::views;

// ---------------------------------------------------------------------------
// Upsert / detail / delete
// ---------------------------------------------------------------------------

/// POST /api/v1/projects
pub async fn upsert(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(input): Json<service::project::UpsertProjectInput>,
) -> AppResult<(StatusCode, Json<DataResponse<MasterProject>>)> {
    let created = input.id.is_none();
    let project = service::project::upsert_project(&state.pool, admin.admin_id, &input).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: project })))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<views::ProjectDetail>>> {
    let detail = views::project_detail(&state.pool, id).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    service::project::delete_project(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Listing / search / autocomplete
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub filter_stage: Option<String>,
    pub admin_id: Option<DbId>,
    pub start: Option<i64>,
    pub end: Option<i64>,
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<DataResponse<views::ProjectList>>> {
    let list = views::list_projects(
        &state.pool,
        query.q.as_deref(),
        query.filter_stage.as_deref(),
        query.admin_id,
        query.start,
        query.end,
    )
    .await?;
    Ok(Json(DataResponse { data: list }))
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<i64>,
}

/// GET /api/v1/projects/autocomplete
pub async fn autocomplete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(query): Query<AutocompleteQuery>,
) -> AppResult<Json<DataResponse<Vec<AutocompleteHit>>>> {
    let hits = views::autocomplete(&state.pool, &query.q, query.limit).await?;
    Ok(Json(DataResponse { data: hits }))
}

#[derive(Debug, Deserialize)]
pub struct AssignAutocompleteQuery {
    pub freelancer_id: DbId,
    #[serde(default)]
    pub q: String,
    pub limit: Option<i64>,
}

/// GET /api/v1/projects/assign-autocomplete
pub async fn assign_autocomplete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(query): Query<AssignAutocompleteQuery>,
) -> AppResult<Json<DataResponse<Vec<views::AssignAutocompleteHit>>>> {
    let hits =
        views::assign_autocomplete(&state.pool, query.freelancer_id, &query.q, query.limit)
            .await?;
    Ok(Json(DataResponse { data: hits }))
}

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct StageInput {
    pub stage: String,
}

/// PUT /api/v1/projects/{id}/stage
pub async fn set_stage(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<StageInput>,
) -> AppResult<StatusCode> {
    service::project::set_stage(&state.pool, id, &input.stage).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// PUT /api/v1/projects/{id}/location
pub async fn upsert_location(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertLocation>,
) -> AppResult<Json<DataResponse<ProjectLocation>>> {
    let location = service::project::upsert_location(&state.pool, id, &input).await?;
    Ok(Json(DataResponse { data: location }))
}

/// GET /api/v1/projects/{id}/location
pub async fn get_location(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Option<ProjectLocation>>>> {
    let location = LocationRepo::find_by_project(&state.pool, id).await?;
    Ok(Json(DataResponse { data: location }))
}

// ---------------------------------------------------------------------------
// Resourcing
// ---------------------------------------------------------------------------

/// The resourcing row plus the current team-member set.
#[derive(Debug, Serialize)]
pub struct ResourcingView {
    pub resourcing: Option<ProjectResourcing>,
    pub members: Vec<Admin>,
}

/// PUT /api/v1/projects/{id}/resourcing
pub async fn upsert_resourcing(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertResourcing>,
) -> AppResult<Json<DataResponse<ProjectResourcing>>> {
    let mailer = state.mailer.as_deref();
    let resourcing =
        service::project::upsert_resourcing(&state.pool, id, &input, mailer).await?;
    Ok(Json(DataResponse { data: resourcing }))
}

/// GET /api/v1/projects/{id}/resourcing
pub async fn get_resourcing(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ResourcingView>>> {
    let resourcing = ResourcingRepo::find_by_project(&state.pool, id).await?;
    let members = MembershipRepo::list_members(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: ResourcingView {
            resourcing,
            members,
        },
    }))
}

// ---------------------------------------------------------------------------
// Scope documents
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ScopeLinksInput {
    #[serde(default)]
    pub links: Vec<ScopeLinkInput>,
}

/// PUT /api/v1/projects/{id}/scope-links
pub async fn replace_scope_links(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<ScopeLinksInput>,
) -> AppResult<StatusCode> {
    service::project::replace_scope_links(&state.pool, id, &input.links).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct ScopeFilesInput {
    #[serde(default)]
    pub links: Vec<String>,
}

/// PUT /api/v1/projects/{id}/scope-files
pub async fn replace_scope_files(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<ScopeFilesInput>,
) -> AppResult<StatusCode> {
    service::project::replace_scope_files(&state.pool, id, &input.links).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Client / feedback
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ClientInput {
    pub client_id: DbId,
    pub stakeholder_id: Option<DbId>,
}

/// PUT /api/v1/projects/{id}/client
pub async fn set_client(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<ClientInput>,
) -> AppResult<Json<DataResponse<ProjectClientMap>>> {
    let map =
        service::project::set_client(&state.pool, id, input.client_id, input.stakeholder_id)
            .await?;
    Ok(Json(DataResponse { data: map }))
}

#[derive(Debug, Deserialize)]
pub struct FeedbackInput {
    #[serde(default)]
    pub scale_ids: Vec<DbId>,
    #[serde(default)]
    pub criteria_ids: Vec<DbId>,
}

/// PUT /api/v1/projects/{id}/feedback
pub async fn set_feedback(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<FeedbackInput>,
) -> AppResult<StatusCode> {
    service::project::set_feedback(&state.pool, id, &input.scale_ids, &input.criteria_ids)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/projects/{id}/feedback
pub async fn get_feedback(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<views::FeedbackView>>> {
    let feedback = views::project_feedback(&state.pool, id).await?;
    Ok(Json(DataResponse { data: feedback }))
}

// ---------------------------------------------------------------------------
// Candidates (project-scoped reads)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CandidateQuery {
    pub status: Option<String>,
    pub sort: Option<String>,
    pub start: Option<i64>,
    pub end: Option<i64>,
}

/// GET /api/v1/projects/{id}/candidates
pub async fn candidates(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Query(query): Query<CandidateQuery>,
) -> AppResult<Json<DataResponse<views::CandidateList>>> {
    let list = views::project_candidates(
        &state.pool,
        id,
        query.status.as_deref(),
        query.sort.as_deref(),
        query.start,
        query.end,
    )
    .await?;
    Ok(Json(DataResponse { data: list }))
}

/// GET /api/v1/projects/{id}/candidate-counts
pub async fn candidate_counts(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<StageCount>>>> {
    let counts = views::candidate_counts(&state.pool, id).await?;
    Ok(Json(DataResponse { data: counts }))
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct NoteInput {
    pub note: String,
}

/// POST /api/v1/projects/{id}/notes
pub async fn add_note(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<NoteInput>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectNote>>)> {
    let note =
        service::note::add_project_note(&state.pool, admin.admin_id, id, &input.note).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}
