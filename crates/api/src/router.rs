//! Router assembly for the staffing API.
//!
//! One [`Router`] serves both audiences: the admin console (projects,
//! candidates, search and autocomplete, notes, bulk email) under
//! `/api/v1`, and the freelancer portal (own project list, freelancer
//! notes) on the same prefix behind a freelancer token. The health
//! check is additionally merged at the root so load balancers can hit
//! `/health` without the prefix.
//!
//! [`build_app_router`] is the single construction point; `main.rs` and
//! `tests/common/mod.rs` both call it so tests exercise the production
//! middleware stack, including the panic handler and the request
//! timeout that also bounds the full-text reindex endpoint.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request UUID, set on ingress and echoed on
/// the response.
const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Build the full application [`Router`] with all middleware layers.
///
/// The middleware stack is applied bottom-up:
///
/// 1. CORS (admin console and portal origins from `CORS_ORIGINS`)
/// 2. Set request ID on incoming requests
/// 3. Structured request/response tracing
/// 4. Propagate request ID to response
/// 5. Request timeout
/// 6. Panic recovery (catch panics, return 500)
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = cors_layer(&config.cors_origins);

    Router::new()
        // Health check at root level as well as under /api/v1.
        .merge(routes::health::router())
        // Admin console and freelancer portal routes.
        .nest("/api/v1", routes::api_routes())
        // -- Middleware stack (applied bottom-up) --
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// CORS layer for the browser frontends.
///
/// Credentials are allowed because both frontends send the bearer token
/// from an authenticated session; the method list matches the verbs the
/// route table actually registers.
///
/// # Panics
///
/// Panics at startup if any configured origin fails to parse as a
/// header value.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<_> = origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
