//! Handlers for lookup constants, the dashboard, and index administration.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use stafflane_core::types::DbId;
use stafflane_db::models::dashboard::DashboardCounts;
use stafflane_db::models::resourcing::ResourcingConstants;
use stafflane_db::repositories::dashboard_repo::DashboardRepo;
use stafflane_db::repositories::lookup_repo::LookupRepo;

use crate::error::AppResult;
use crate::indexer;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/resourcing/constants
pub async fn resourcing_constants(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<DataResponse<ResourcingConstants>>> {
    let constants = LookupRepo::resourcing_constants(&state.pool).await?;
    Ok(Json(DataResponse { data: constants }))
}

/// GET /api/v1/dashboard/counts
pub async fn dashboard_counts(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<DataResponse<DashboardCounts>>> {
    let counts = DashboardRepo::counts(&state.pool).await?;
    Ok(Json(DataResponse { data: counts }))
}

#[derive(Debug, Default, Deserialize)]
pub struct ReindexInput {
    /// Restrict the rebuild to these projects; absent means all live ones.
    pub project_ids: Option<Vec<DbId>>,
    /// Keep existing documents instead of wiping first.
    #[serde(default)]
    pub keep_index: bool,
}

#[derive(Debug, Serialize)]
pub struct ReindexResponse {
    pub indexed: usize,
}

/// POST /api/v1/admin/reindex
pub async fn reindex(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<ReindexInput>,
) -> AppResult<Json<DataResponse<ReindexResponse>>> {
    let indexed = indexer::index_all_projects(
        &state.pool,
        input.project_ids.as_deref(),
        input.keep_index,
    )
    .await
    .map_err(crate::error::AppError::Database)?;
    tracing::info!(indexed, keep_index = input.keep_index, "Search index rebuilt");
    Ok(Json(DataResponse {
        data: ReindexResponse { indexed },
    }))
}
