//! Route definitions for lookup constants, the dashboard, and index
//! administration.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::misc;
use crate::state::AppState;

/// Misc routes (mounted at the API root, not nested).
///
/// ```text
/// GET  /resourcing/constants  -> resourcing_constants
/// GET  /dashboard/counts      -> dashboard_counts
/// POST /admin/reindex         -> reindex
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/resourcing/constants", get(misc::resourcing_constants))
        .route("/dashboard/counts", get(misc::dashboard_counts))
        .route("/admin/reindex", post(misc::reindex))
}
