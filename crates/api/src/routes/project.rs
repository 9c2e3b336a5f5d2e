//! Route definitions for the `/projects` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> upsert
/// GET    /autocomplete            -> autocomplete
/// GET    /assign-autocomplete     -> assign_autocomplete
/// GET    /{id}                    -> get_by_id
/// DELETE /{id}                    -> delete
/// PUT    /{id}/stage              -> set_stage
/// GET    /{id}/location           -> get_location
/// PUT    /{id}/location           -> upsert_location
/// GET    /{id}/resourcing         -> get_resourcing
/// PUT    /{id}/resourcing         -> upsert_resourcing
/// PUT    /{id}/scope-links        -> replace_scope_links
/// PUT    /{id}/scope-files        -> replace_scope_files
/// PUT    /{id}/client             -> set_client
/// GET    /{id}/feedback           -> get_feedback
/// PUT    /{id}/feedback           -> set_feedback
/// GET    /{id}/candidates         -> candidates
/// GET    /{id}/candidate-counts   -> candidate_counts
/// POST   /{id}/notes              -> add_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::upsert))
        .route("/autocomplete", get(project::autocomplete))
        .route("/assign-autocomplete", get(project::assign_autocomplete))
        .route("/{id}", get(project::get_by_id).delete(project::delete))
        .route("/{id}/stage", put(project::set_stage))
        .route(
            "/{id}/location",
            get(project::get_location).put(project::upsert_location),
        )
        .route(
            "/{id}/resourcing",
            get(project::get_resourcing).put(project::upsert_resourcing),
        )
        .route("/{id}/scope-links", put(project::replace_scope_links))
        .route("/{id}/scope-files", put(project::replace_scope_files))
        .route("/{id}/client", put(project::set_client))
        .route(
            "/{id}/feedback",
            get(project::get_feedback).put(project::set_feedback),
        )
        .route("/{id}/candidates", get(project::candidates))
        .route("/{id}/candidate-counts", get(project::candidate_counts))
        .route("/{id}/notes", post(project::add_note))
}
