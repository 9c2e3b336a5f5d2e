mod common;

use sqlx::PgPool;
use stafflane_core::candidate::CandidateSort;
use stafflane_db::models::candidate::EditCandidate;
use stafflane_db::repositories::candidate_repo::CandidateRepo;

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_is_idempotent_per_mapping(pool: PgPool) {
    let (_, project_id) = common::insert_project(&pool, "Funnel A").await;
    let freelancer_id = common::insert_freelancer(&pool, "Femi", "femi@mail.test").await;

    let mut tx = pool.begin().await.unwrap();
    let inserted = CandidateRepo::add_to_projects(&mut *tx, &[project_id], freelancer_id)
        .await
        .unwrap();
    tx.commit().await.unwrap();
    assert_eq!(inserted, 1);

    // Move the candidate, then re-add: the existing mapping must be untouched.
    let mut tx = pool.begin().await.unwrap();
    let candidates = CandidateRepo::list_for_project(&pool, project_id, None, None, 50, 0)
        .await
        .unwrap();
    CandidateRepo::update(
        &mut *tx,
        candidates[0].id,
        &EditCandidate {
            stage: Some("Shortlist".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let inserted = CandidateRepo::add_to_projects(&mut *tx, &[project_id], freelancer_id)
        .await
        .unwrap();
    tx.commit().await.unwrap();
    assert_eq!(inserted, 0);

    let candidates = CandidateRepo::list_for_project(&pool, project_id, None, None, 50, 0)
        .await
        .unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].stage, "Shortlist");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reject_keeps_row_and_stage(pool: PgPool) {
    let (_, project_id) = common::insert_project(&pool, "Funnel B").await;
    let freelancer_id = common::insert_freelancer(&pool, "Gina", "gina@mail.test").await;

    let mut tx = pool.begin().await.unwrap();
    CandidateRepo::add_to_projects(&mut *tx, &[project_id], freelancer_id)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let candidates = CandidateRepo::list_for_project(&pool, project_id, None, None, 50, 0)
        .await
        .unwrap();
    let candidate_id = candidates[0].id;

    let mut tx = pool.begin().await.unwrap();
    assert_eq!(CandidateRepo::reject(&mut *tx, &[candidate_id]).await.unwrap(), 1);
    tx.commit().await.unwrap();

    let candidates = CandidateRepo::list_for_project(&pool, project_id, None, None, 50, 0)
        .await
        .unwrap();
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].rejected);
    assert_eq!(candidates[0].stage, "Longlist");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn removed_stage_excluded_from_listing(pool: PgPool) {
    let (_, project_id) = common::insert_project(&pool, "Funnel C").await;
    let keep = common::insert_freelancer(&pool, "Keep", "keep@mail.test").await;
    let gone = common::insert_freelancer(&pool, "Gone", "gone@mail.test").await;

    let mut tx = pool.begin().await.unwrap();
    CandidateRepo::add_to_projects(&mut *tx, &[project_id], keep)
        .await
        .unwrap();
    CandidateRepo::add_to_projects(&mut *tx, &[project_id], gone)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let candidates = CandidateRepo::list_for_project(&pool, project_id, None, None, 50, 0)
        .await
        .unwrap();
    let removed_id = candidates
        .iter()
        .find(|c| c.freelancer_id == gone)
        .unwrap()
        .id;

    let mut tx = pool.begin().await.unwrap();
    CandidateRepo::update(
        &mut *tx,
        removed_id,
        &EditCandidate {
            stage: Some("Remove from project".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    tx.commit().await.unwrap();

    let candidates = CandidateRepo::list_for_project(&pool, project_id, None, None, 50, 0)
        .await
        .unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].freelancer_id, keep);

    assert_eq!(
        CandidateRepo::count_for_project(&pool, project_id).await.unwrap(),
        1
    );
    // The raw stage list still carries the removed entry for bucketing.
    assert_eq!(
        CandidateRepo::stages_for_project(&pool, project_id)
            .await
            .unwrap()
            .len(),
        2
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn alphabetical_sort_with_descending_prefix(pool: PgPool) {
    let (_, project_id) = common::insert_project(&pool, "Funnel D").await;
    for (name, email) in [("Zara", "z@mail.test"), ("Abel", "a@mail.test")] {
        let id = common::insert_freelancer(&pool, name, email).await;
        let mut tx = pool.begin().await.unwrap();
        CandidateRepo::add_to_projects(&mut *tx, &[project_id], id)
            .await
            .unwrap();
        tx.commit().await.unwrap();
    }

    let sort = CandidateSort::parse("alphabetical");
    let asc = CandidateRepo::list_for_project(&pool, project_id, None, sort, 50, 0)
        .await
        .unwrap();
    assert_eq!(asc[0].freelancer_name, "Abel");

    let sort = CandidateSort::parse("-alphabetical");
    let desc = CandidateRepo::list_for_project(&pool, project_id, None, sort, 50, 0)
        .await
        .unwrap();
    assert_eq!(desc[0].freelancer_name, "Zara");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quote_update_requires_existing_mapping(pool: PgPool) {
    let (_, project_id) = common::insert_project(&pool, "Funnel E").await;
    let freelancer_id = common::insert_freelancer(&pool, "Hana", "hana@mail.test").await;

    let mut tx = pool.begin().await.unwrap();
    let missing = CandidateRepo::update_quote(
        &mut *tx,
        project_id,
        freelancer_id,
        Some("day"),
        Some("EUR"),
        Some(900.0),
    )
    .await
    .unwrap();
    assert!(missing.is_none());

    CandidateRepo::add_to_projects(&mut *tx, &[project_id], freelancer_id)
        .await
        .unwrap();
    let updated = CandidateRepo::update_quote(
        &mut *tx,
        project_id,
        freelancer_id,
        Some("day"),
        Some("EUR"),
        Some(900.0),
    )
    .await
    .unwrap()
    .unwrap();
    tx.commit().await.unwrap();

    assert_eq!(updated.rate_amount, Some(900.0));
    assert_eq!(updated.rate_currency.as_deref(), Some("EUR"));
}
