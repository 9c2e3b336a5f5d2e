mod common;

use sqlx::PgPool;
use stafflane_core::search::{build_prefix_tsquery, build_tsquery};
use stafflane_db::repositories::index_repo::IndexRepo;

async fn index_fixture(pool: &PgPool, project_id: i64, title: &str, body: &str, ac: &str) {
    IndexRepo::upsert_document(pool, project_id, title, Some("Acme"), body, ac)
        .await
        .unwrap();
    IndexRepo::upsert_project_keyword(pool, project_id, title, ac)
        .await
        .unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_finds_indexed_project(pool: PgPool) {
    let (_, project_id) = common::insert_project(&pool, "Pricing Study").await;
    index_fixture(
        &pool,
        project_id,
        "Acme - Pricing Study",
        "pricing retail freelance market scan",
        "acme pricing study",
    )
    .await;

    let tsquery = build_tsquery("pricing retail").unwrap();
    let hits = IndexRepo::search(&pool, &tsquery, 20, 0).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].project_id, project_id);
    assert_eq!(hits[0].client_name.as_deref(), Some("Acme"));

    let tsquery = build_tsquery("blockchain").unwrap();
    assert!(IndexRepo::search(&pool, &tsquery, 20, 0).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reindex_overwrites_document(pool: PgPool) {
    let (_, project_id) = common::insert_project(&pool, "Old Name").await;
    index_fixture(&pool, project_id, "Acme - Old Name", "old name", "acme old name").await;
    index_fixture(&pool, project_id, "Acme - New Name", "new name", "acme new name").await;

    let doc = IndexRepo::get_document(&pool, project_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(doc.title, "Acme - New Name");

    // The old terms no longer match.
    let tsquery = build_tsquery("old").unwrap();
    assert!(IndexRepo::search(&pool, &tsquery, 20, 0).await.unwrap().is_empty());
    let tsquery = build_tsquery("new").unwrap();
    assert_eq!(IndexRepo::search(&pool, &tsquery, 20, 0).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn autocomplete_matches_prefixes(pool: PgPool) {
    let (_, project_id) = common::insert_project(&pool, "Pricing Study").await;
    index_fixture(
        &pool,
        project_id,
        "Acme - Pricing Study",
        "pricing",
        "acme pricing study",
    )
    .await;

    let tsquery = build_prefix_tsquery("pri").unwrap();
    let hits = IndexRepo::autocomplete(&pool, &tsquery, 10).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].keyword_id, project_id);
    assert_eq!(hits[0].keyword, "Acme - Pricing Study");

    let tsquery = build_prefix_tsquery("acme stu").unwrap();
    assert_eq!(IndexRepo::autocomplete(&pool, &tsquery, 10).await.unwrap().len(), 1);

    let tsquery = build_prefix_tsquery("zzz").unwrap();
    assert!(IndexRepo::autocomplete(&pool, &tsquery, 10).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wipe_clears_project_documents(pool: PgPool) {
    let (_, project_id) = common::insert_project(&pool, "Wipe Me").await;
    index_fixture(&pool, project_id, "Wipe Me", "wipe", "wipe me").await;

    IndexRepo::wipe(&pool).await.unwrap();

    assert!(IndexRepo::get_document(&pool, project_id).await.unwrap().is_none());
    let count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM keyword_documents WHERE keyword_type = 'project'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count.0, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn load_source_collects_related_names(pool: PgPool) {
    use stafflane_core::attribute::AttributeKind;
    use stafflane_db::repositories::attribute_repo::AttributeRepo;

    let (_, project_id) = common::insert_project(&pool, "Sourced").await;
    let mut tx = pool.begin().await.unwrap();
    AttributeRepo::replace(
        &mut *tx,
        project_id,
        AttributeKind::Expertise,
        &["Pricing".to_string()],
    )
    .await
    .unwrap();
    tx.commit().await.unwrap();

    let source = IndexRepo::load_source(&pool, project_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(source.project.id, project_id);
    assert_eq!(source.skills, vec!["Pricing"]);
    assert!(source.client_name.is_none());

    assert!(IndexRepo::load_source(&pool, 99_999).await.unwrap().is_none());
}
