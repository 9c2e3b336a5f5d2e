pub mod candidate;
pub mod freelancer;
pub mod health;
pub mod misc;
pub mod note;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                              list, upsert
/// /projects/autocomplete                 title prefix search
/// /projects/assign-autocomplete          annotated with assignment state
/// /projects/{id}                         detail, soft delete
/// /projects/{id}/stage                   funnel transition (PUT)
/// /projects/{id}/location                get, put
/// /projects/{id}/resourcing              get, put (sends assignment email)
/// /projects/{id}/scope-links             replace set (PUT)
/// /projects/{id}/scope-files             replace set (PUT)
/// /projects/{id}/client                  replace mapping (PUT)
/// /projects/{id}/feedback                get, put
/// /projects/{id}/candidates              funnel listing
/// /projects/{id}/candidate-counts        stage buckets
/// /projects/{id}/notes                   add note (POST)
///
/// /candidates                            bulk add (POST)
/// /candidates/reject                     soft reject (POST)
/// /candidates/quote                      rate quote (PUT)
/// /candidates/bulk-email                 one message to many (POST)
/// /candidates/{id}                       edit stage/rates (PUT)
///
/// /freelancers/{id}/projects             project history (admin)
/// /freelancers/{id}/notes                list, add
/// /freelancer/projects                   own history (freelancer token)
///
/// /notes/project/{id}                    edit, delete
/// /notes/freelancer/{id}                 edit, delete
///
/// /resourcing/constants                  lookup vocabularies
/// /dashboard/counts                      headline counts
/// /admin/reindex                         full index rebuild (POST)
/// /health                                service + database health
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/projects", project::router())
        .nest("/candidates", candidate::router())
        .merge(freelancer::router())
        .nest("/notes", note::router())
        .merge(misc::router())
}
