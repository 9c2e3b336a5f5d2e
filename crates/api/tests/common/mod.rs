//! Shared helpers for API integration tests: router construction, token
//! minting, row seeding, and request plumbing.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use stafflane_api::auth::jwt::{generate_access_token, JwtConfig, ROLE_ADMIN, ROLE_FREELANCER};
use stafflane_api::config::ServerConfig;
use stafflane_api::router::build_app_router;
use stafflane_api::state::AppState;
use stafflane_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
        email: None,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool. Mirrors `main.rs` so tests exercise the same
/// stack production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        mailer: None,
    };
    build_app_router(state, &config)
}

/// Mint an admin access token for the given admin row id.
pub fn admin_token(admin_id: DbId) -> String {
    generate_access_token(admin_id, ROLE_ADMIN, &test_config().jwt)
        .expect("token generation must succeed")
}

/// Mint a freelancer access token for the given freelancer row id.
pub fn freelancer_token(freelancer_id: DbId) -> String {
    generate_access_token(freelancer_id, ROLE_FREELANCER, &test_config().jwt)
        .expect("token generation must succeed")
}

// ---------------------------------------------------------------------------
// Row seeding
// ---------------------------------------------------------------------------

pub async fn seed_admin(pool: &PgPool, name: &str) -> DbId {
    let row: (DbId,) = sqlx::query_as(
        "INSERT INTO admins (name, email) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(format!("{}@corp.test", name.to_lowercase().replace(' ', ".")))
    .fetch_one(pool)
    .await
    .expect("admin insert must succeed");
    row.0
}

pub async fn seed_freelancer(pool: &PgPool, name: &str, email: &str) -> DbId {
    let row: (DbId,) = sqlx::query_as(
        "INSERT INTO freelancers (name, email) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .fetch_one(pool)
    .await
    .expect("freelancer insert must succeed");
    row.0
}

pub async fn seed_client(pool: &PgPool, name: &str) -> DbId {
    let row: (DbId,) = sqlx::query_as("INSERT INTO clients (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("client insert must succeed");
    row.0
}

// ---------------------------------------------------------------------------
// Request plumbing
// ---------------------------------------------------------------------------

/// Send a GET request with a bearer token.
pub async fn get(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request without credentials.
pub async fn get_anon(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a request with a JSON body and a bearer token.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    token: &str,
    body: &Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a bearer token.
pub async fn delete(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be JSON")
}
