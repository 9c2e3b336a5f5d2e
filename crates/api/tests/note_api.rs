//! Integration tests for project and freelancer notes, including the
//! author-only edit rule and the claiming of ownerless notes.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete, get, seed_admin, seed_freelancer, send_json};
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
async fn project_note_lifecycle(pool: PgPool) {
    let admin_id = seed_admin(&pool, "Dana Meyer").await;
    let token = admin_token(admin_id);
    let app = common::build_test_app(pool);

    let project_id = create_project(&app, &token, "Noted Project").await;

    let response = send_json(
        app.clone(),
        "POST",
        &format!("/api/v1/projects/{project_id}/notes"),
        &token,
        &json!({ "note": "Client prefers weekly check-ins" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let note_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = send_json(
        app.clone(),
        "PUT",
        &format!("/api/v1/notes/project/{note_id}"),
        &token,
        &json!({ "note": "Client prefers fortnightly check-ins" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["data"]["note"],
        "Client prefers fortnightly check-ins"
    );

    // The detail view carries the note with author metadata.
    let response = get(app.clone(), &format!("/api/v1/projects/{project_id}"), &token).await;
    let json = body_json(response).await;
    let notes = json["data"]["note_list"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["created_by"], "Dana Meyer");
    assert!(notes[0]["time_elapsed"].is_string());

    let response = delete(
        app.clone(),
        &format!("/api/v1/notes/project/{note_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/projects/{project_id}"), &token).await;
    let json = body_json(response).await;
    assert!(json["data"]["note_list"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn only_the_author_may_edit_or_delete(pool: PgPool) {
    let author_id = seed_admin(&pool, "Dana Meyer").await;
    let other_id = seed_admin(&pool, "Sam Reed").await;
    let author = admin_token(author_id);
    let other = admin_token(other_id);
    let app = common::build_test_app(pool);

    let project_id = create_project(&app, &author, "Guarded Project").await;
    let response = send_json(
        app.clone(),
        "POST",
        &format!("/api/v1/projects/{project_id}/notes"),
        &author,
        &json!({ "note": "Internal only" }),
    )
    .await;
    let note_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = send_json(
        app.clone(),
        "PUT",
        &format!("/api/v1/notes/project/{note_id}"),
        &other,
        &json!({ "note": "Hijacked" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete(
        app.clone(),
        &format!("/api/v1/notes/project/{note_id}"),
        &other,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The author still can.
    let response = send_json(
        app,
        "PUT",
        &format!("/api/v1/notes/project/{note_id}"),
        &author,
        &json!({ "note": "Still internal" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn editing_an_ownerless_note_claims_it(pool: PgPool) {
    let admin_id = seed_admin(&pool, "Dana Meyer").await;
    let token = admin_token(admin_id);
    let app = common::build_test_app(pool.clone());

    let project_id = create_project(&app, &token, "Legacy Project").await;
    let (note_id,): (i64,) = sqlx::query_as(
        "INSERT INTO project_notes (project_id, note) VALUES ($1, 'imported note') RETURNING id",
    )
    .bind(project_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    let response = send_json(
        app,
        "PUT",
        &format!("/api/v1/notes/project/{note_id}"),
        &token,
        &json!({ "note": "imported, reviewed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (owner,): (Option<i64>,) =
        sqlx::query_as("SELECT admin_id FROM project_notes WHERE id = $1")
            .bind(note_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(owner, Some(admin_id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn freelancer_notes_roundtrip(pool: PgPool) {
    let admin_id = seed_admin(&pool, "Dana Meyer").await;
    let freelancer_id = seed_freelancer(&pool, "Kim Novak", "kim@freelance.test").await;
    let token = admin_token(admin_id);
    let app = common::build_test_app(pool);

    let project_id = create_project(&app, &token, "Context Project").await;
    let response = send_json(
        app.clone(),
        "POST",
        &format!("/api/v1/freelancers/{freelancer_id}/notes"),
        &token,
        &json!({ "note": "Strong pricing background", "project_id": project_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let note_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = get(
        app.clone(),
        &format!("/api/v1/freelancers/{freelancer_id}/notes"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["note"], "Strong pricing background");
    assert_eq!(json["data"][0]["created_by"], "Dana Meyer");

    let response = delete(app, &format!("/api/v1/notes/freelancer/{note_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn note_on_missing_parent_is_rejected(pool: PgPool) {
    let admin_id = seed_admin(&pool, "Dana Meyer").await;
    let token = admin_token(admin_id);
    let app = common::build_test_app(pool);

    let response = send_json(
        app,
        "POST",
        "/api/v1/projects/999999/notes",
        &token,
        &json!({ "note": "orphan" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
