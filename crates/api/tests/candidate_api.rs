//! Integration tests for the candidate pipeline: bulk add, funnel
//! listing, counts, reject, edit, and quotes.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, freelancer_token, get, seed_admin, seed_freelancer, send_json,
};
use serde_json::json;
use sqlx::PgPool;

async fn create_project(app: &axum::Router, token: &str, name: &str) -> i64 {
    let response = send_json(
        app.clone(),
        "POST",
        "/api/v1/projects",
        token,
        &json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bulk_add_is_idempotent_and_accepts_profile(pool: PgPool) {
    let admin_id = seed_admin(&pool, "Dana Meyer").await;
    let freelancer_id = seed_freelancer(&pool, "Kim Novak", "kim@freelance.test").await;
    let token = admin_token(admin_id);
    let app = common::build_test_app(pool.clone());

    let first = create_project(&app, &token, "Alpha").await;
    let second = create_project(&app, &token, "Beta").await;

    let payload = json!({ "project_ids": [first, second], "freelancer_id": freelancer_id });
    let response = send_json(app.clone(), "POST", "/api/v1/candidates", &token, &payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["added"], 2);

    // Same request again inserts nothing.
    let response = send_json(app.clone(), "POST", "/api/v1/candidates", &token, &payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["added"], 0);

    let (status,): (Option<String>,) =
        sqlx::query_as("SELECT profile_status FROM freelancers WHERE id = $1")
            .bind(freelancer_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(status.as_deref(), Some("Accepted"));

    let response = get(
        app,
        &format!("/api/v1/projects/{first}/candidates"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 1);
    assert_eq!(json["data"]["candidates"][0]["stage"], "Longlist");
    assert_eq!(json["data"]["candidates"][0]["freelancer_name"], "Kim Novak");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_with_unknown_project_is_rejected(pool: PgPool) {
    let admin_id = seed_admin(&pool, "Dana Meyer").await;
    let freelancer_id = seed_freelancer(&pool, "Kim Novak", "kim@freelance.test").await;
    let token = admin_token(admin_id);
    let app = common::build_test_app(pool);

    let response = send_json(
        app,
        "POST",
        "/api/v1/candidates",
        &token,
        &json!({ "project_ids": [999_999], "freelancer_id": freelancer_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn counts_bucket_by_template_and_exclude_removed(pool: PgPool) {
    let admin_id = seed_admin(&pool, "Dana Meyer").await;
    let token = admin_token(admin_id);
    let app = common::build_test_app(pool.clone());

    let project_id = create_project(&app, &token, "Funnel Project").await;
    let mut candidate_ids = Vec::new();
    for (name, email) in [
        ("Kim Novak", "kim@freelance.test"),
        ("Ada Wong", "ada@freelance.test"),
        ("Ben Cole", "ben@freelance.test"),
    ] {
        let freelancer_id = seed_freelancer(&pool, name, email).await;
        send_json(
            app.clone(),
            "POST",
            "/api/v1/candidates",
            &token,
            &json!({ "project_ids": [project_id], "freelancer_id": freelancer_id }),
        )
        .await;
        let (id,): (i64,) = sqlx::query_as(
            "SELECT id FROM project_candidate_map WHERE project_id = $1 AND freelancer_id = $2",
        )
        .bind(project_id)
        .bind(freelancer_id)
        .fetch_one(&pool)
        .await
        .unwrap();
        candidate_ids.push(id);
    }

    // Move one to Shortlist, remove another from the project.
    send_json(
        app.clone(),
        "PUT",
        &format!("/api/v1/candidates/{}", candidate_ids[1]),
        &token,
        &json!({ "stage": "Shortlist" }),
    )
    .await;
    send_json(
        app.clone(),
        "PUT",
        &format!("/api/v1/candidates/{}", candidate_ids[2]),
        &token,
        &json!({ "stage": "Remove from project" }),
    )
    .await;

    let response = get(
        app,
        &format!("/api/v1/projects/{project_id}/candidate-counts"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    let buckets = json["data"].as_array().unwrap();

    assert_eq!(buckets[0]["stage_name"], "All");
    assert_eq!(buckets[0]["count"], 2);
    let by_name = |name: &str| {
        buckets
            .iter()
            .find(|b| b["stage_name"] == name)
            .unwrap()["count"]
            .as_i64()
            .unwrap()
    };
    assert_eq!(by_name("Longlist"), 1);
    assert_eq!(by_name("Shortlist"), 1);
    assert_eq!(by_name("Remove from project"), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reject_is_soft_and_keeps_stage(pool: PgPool) {
    let admin_id = seed_admin(&pool, "Dana Meyer").await;
    let freelancer_id = seed_freelancer(&pool, "Kim Novak", "kim@freelance.test").await;
    let token = admin_token(admin_id);
    let app = common::build_test_app(pool.clone());

    let project_id = create_project(&app, &token, "Reject Project").await;
    send_json(
        app.clone(),
        "POST",
        "/api/v1/candidates",
        &token,
        &json!({ "project_ids": [project_id], "freelancer_id": freelancer_id }),
    )
    .await;
    let (candidate_id,): (i64,) =
        sqlx::query_as("SELECT id FROM project_candidate_map WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(&pool)
            .await
            .unwrap();

    let response = send_json(
        app.clone(),
        "POST",
        "/api/v1/candidates/reject",
        &token,
        &json!({ "candidate_ids": [candidate_id] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["rejected"], 1);

    let response = get(
        app,
        &format!("/api/v1/projects/{project_id}/candidates"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["candidates"][0]["rejected"], true);
    assert_eq!(json["data"]["candidates"][0]["stage"], "Longlist");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn moving_back_to_longlist_resets_interview_status(pool: PgPool) {
    let admin_id = seed_admin(&pool, "Dana Meyer").await;
    let freelancer_id = seed_freelancer(&pool, "Kim Novak", "kim@freelance.test").await;
    let token = admin_token(admin_id);
    let app = common::build_test_app(pool.clone());

    let project_id = create_project(&app, &token, "Interview Project").await;
    send_json(
        app.clone(),
        "POST",
        "/api/v1/candidates",
        &token,
        &json!({ "project_ids": [project_id], "freelancer_id": freelancer_id }),
    )
    .await;
    sqlx::query("UPDATE freelancers SET interview_status = 'Scheduled' WHERE id = $1")
        .bind(freelancer_id)
        .execute(&pool)
        .await
        .unwrap();
    let (candidate_id,): (i64,) =
        sqlx::query_as("SELECT id FROM project_candidate_map WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(&pool)
            .await
            .unwrap();

    send_json(
        app.clone(),
        "PUT",
        &format!("/api/v1/candidates/{candidate_id}"),
        &token,
        &json!({ "stage": "Shortlist" }),
    )
    .await;
    let (status,): (Option<String>,) =
        sqlx::query_as("SELECT interview_status FROM freelancers WHERE id = $1")
            .bind(freelancer_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(status.as_deref(), Some("Scheduled"));

    send_json(
        app,
        "PUT",
        &format!("/api/v1/candidates/{candidate_id}"),
        &token,
        &json!({ "stage": "Longlist" }),
    )
    .await;
    let (status,): (Option<String>,) =
        sqlx::query_as("SELECT interview_status FROM freelancers WHERE id = $1")
            .bind(freelancer_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(status.as_deref(), Some("Pending"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quote_requires_existing_mapping(pool: PgPool) {
    let admin_id = seed_admin(&pool, "Dana Meyer").await;
    let freelancer_id = seed_freelancer(&pool, "Kim Novak", "kim@freelance.test").await;
    let token = admin_token(admin_id);
    let app = common::build_test_app(pool);

    let project_id = create_project(&app, &token, "Quote Project").await;

    // No mapping yet.
    let payload = json!({
        "project_id": project_id,
        "freelancer_id": freelancer_id,
        "rate_unit": "per hour",
        "rate_currency": "EUR",
        "rate_amount": 140.0,
    });
    let response =
        send_json(app.clone(), "PUT", "/api/v1/candidates/quote", &token, &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    send_json(
        app.clone(),
        "POST",
        "/api/v1/candidates",
        &token,
        &json!({ "project_ids": [project_id], "freelancer_id": freelancer_id }),
    )
    .await;

    let response = send_json(app, "PUT", "/api/v1/candidates/quote", &token, &payload).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["rate_currency"], "EUR");
    assert_eq!(json["data"]["rate_amount"], 140.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bulk_email_without_smtp_is_rejected(pool: PgPool) {
    let admin_id = seed_admin(&pool, "Dana Meyer").await;
    let token = admin_token(admin_id);
    let app = common::build_test_app(pool);

    let response = send_json(
        app,
        "POST",
        "/api/v1/candidates/bulk-email",
        &token,
        &json!({ "candidate_ids": [1], "subject": "Hello", "body": "World" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn freelancer_sees_own_projects_only_with_their_token(pool: PgPool) {
    let admin_id = seed_admin(&pool, "Dana Meyer").await;
    let freelancer_id = seed_freelancer(&pool, "Kim Novak", "kim@freelance.test").await;
    let token = admin_token(admin_id);
    let app = common::build_test_app(pool);

    let project_id = create_project(&app, &token, "History Project").await;
    send_json(
        app.clone(),
        "POST",
        "/api/v1/candidates",
        &token,
        &json!({ "project_ids": [project_id], "freelancer_id": freelancer_id }),
    )
    .await;

    let ftoken = freelancer_token(freelancer_id);
    let response = get(app.clone(), "/api/v1/freelancer/projects", &ftoken).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["project_name"], "History Project");
    assert_eq!(json["data"][0]["stage"], "Longlist");

    // A freelancer token cannot use the admin-facing route.
    let response = get(
        app,
        &format!("/api/v1/freelancers/{freelancer_id}/projects"),
        &ftoken,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
