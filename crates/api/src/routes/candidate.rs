//! Route definitions for the `/candidates` resource.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::candidate;
use crate::state::AppState;

/// Routes mounted at `/candidates`.
///
/// ```text
/// POST /            -> add (one freelancer to many projects)
/// POST /reject      -> reject
/// PUT  /quote       -> quote
/// POST /bulk-email  -> bulk_email
/// PUT  /{id}        -> edit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(candidate::add))
        .route("/reject", post(candidate::reject))
        .route("/quote", put(candidate::quote))
        .route("/bulk-email", post(candidate::bulk_email))
        .route("/{id}", put(candidate::edit))
}
