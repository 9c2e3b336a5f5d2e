//! Route definitions for freelancer-scoped reads and notes.

use axum::routing::get;
use axum::Router;

use crate::handlers::freelancer;
use crate::state::AppState;

/// Freelancer routes (mounted at the API root, not nested).
///
/// ```text
/// GET  /freelancers/{id}/projects  -> projects (admin token)
/// GET  /freelancers/{id}/notes     -> notes
/// POST /freelancers/{id}/notes     -> add_note
/// GET  /freelancer/projects        -> own_projects (freelancer token)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/freelancers/{id}/projects", get(freelancer::projects))
        .route(
            "/freelancers/{id}/notes",
            get(freelancer::notes).post(freelancer::add_note),
        )
        .route("/freelancer/projects", get(freelancer::own_projects))
}
