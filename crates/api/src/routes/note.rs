//! Route definitions for the `/notes` resource.

use axum::routing::put;
use axum::Router;

use crate::handlers::note;
use crate::state::AppState;

/// Routes mounted at `/notes`.
///
/// ```text
/// PUT    /project/{id}     -> edit_project_note
/// DELETE /project/{id}     -> delete_project_note
/// PUT    /freelancer/{id}  -> edit_freelancer_note
/// DELETE /freelancer/{id}  -> delete_freelancer_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/project/{id}",
            put(note::edit_project_note).delete(note::delete_project_note),
        )
        .route(
            "/freelancer/{id}",
            put(note::edit_freelancer_note).delete(note::delete_freelancer_note),
        )
}
