//! Repository for the full-text search index tables.
//!
//! Documents are rebuilt by the API-layer indexer after each committing
//! write; this module owns the SQL for storing and querying them.

use sqlx::PgPool;
use stafflane_core::attribute::AttributeKind;
use stafflane_core::types::DbId;

use crate::models::search::{AutocompleteHit, DocumentSource, ProjectDocument, SearchHit};
use crate::repositories::attribute_repo::AttributeRepo;
use crate::repositories::membership_repo::MembershipRepo;
use crate::repositories::project_repo::ProjectRepo;

/// Keyword type under which project autocomplete entries are stored.
pub const PROJECT_KEYWORD_TYPE: &str = "project";

pub struct IndexRepo;

impl IndexRepo {
    /// Gather everything the document builder needs about one project.
    /// Returns `None` when the project does not exist or is deleted.
    pub async fn load_source(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<DocumentSource>, sqlx::Error> {
        let Some(project) = ProjectRepo::find_by_id(pool, project_id).await? else {
            return Ok(None);
        };
        let client_name = match project.client_id {
            Some(client_id) => {
                let row: Option<(String,)> =
                    sqlx::query_as("SELECT name FROM clients WHERE id = $1")
                        .bind(client_id)
                        .fetch_optional(pool)
                        .await?;
                row.map(|r| r.0)
            }
            None => None,
        };
        let skills = AttributeRepo::list(pool, project_id, AttributeKind::Expertise)
            .await?
            .into_iter()
            .map(|i| i.name)
            .collect();
        let sectors = AttributeRepo::list(pool, project_id, AttributeKind::Sector)
            .await?
            .into_iter()
            .map(|i| i.name)
            .collect();
        let director_names = MembershipRepo::list_directors(pool, project_id)
            .await?
            .into_iter()
            .map(|a| a.name)
            .collect();
        let member_names = MembershipRepo::list_members(pool, project_id)
            .await?
            .into_iter()
            .map(|a| a.name)
            .collect();
        Ok(Some(DocumentSource {
            project,
            client_name,
            skills,
            sectors,
            director_names,
            member_names,
        }))
    }

    /// Store (or refresh) the full-text document for one project. The
    /// search vector is computed in SQL from title and body.
    pub async fn upsert_document(
        pool: &PgPool,
        project_id: DbId,
        title: &str,
        client_name: Option<&str>,
        body: &str,
        ac_search_field: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO project_documents
                (project_id, title, client_name, body, ac_search_field, search_vector, indexed_at)
             VALUES ($1, $2, $3, $4, $5, to_tsvector('english', $2 || ' ' || $4), NOW())
             ON CONFLICT (project_id) DO UPDATE SET
                title = EXCLUDED.title,
                client_name = EXCLUDED.client_name,
                body = EXCLUDED.body,
                ac_search_field = EXCLUDED.ac_search_field,
                search_vector = EXCLUDED.search_vector,
                indexed_at = NOW()",
        )
        .bind(project_id)
        .bind(title)
        .bind(client_name)
        .bind(body)
        .bind(ac_search_field)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Store (or refresh) the autocomplete keyword document for a project.
    pub async fn upsert_project_keyword(
        pool: &PgPool,
        project_id: DbId,
        keyword: &str,
        ac_search_field: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO keyword_documents
                (keyword_type, keyword_id, keyword, ac_search_field, search_vector, indexed_at)
             VALUES ($1, $2, $3, $4, to_tsvector('simple', $4), NOW())
             ON CONFLICT (keyword_type, keyword_id) DO UPDATE SET
                keyword = EXCLUDED.keyword,
                ac_search_field = EXCLUDED.ac_search_field,
                search_vector = EXCLUDED.search_vector,
                indexed_at = NOW()",
        )
        .bind(PROJECT_KEYWORD_TYPE)
        .bind(project_id)
        .bind(keyword)
        .bind(ac_search_field)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Drop a project's documents, used by soft delete.
    pub async fn delete_project(pool: &PgPool, project_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_documents WHERE project_id = $1")
            .bind(project_id)
            .execute(pool)
            .await?;
        sqlx::query("DELETE FROM keyword_documents WHERE keyword_type = $1 AND keyword_id = $2")
            .bind(PROJECT_KEYWORD_TYPE)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Wipe the whole project index ahead of a full rebuild.
    pub async fn wipe(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_documents")
            .execute(pool)
            .await?;
        sqlx::query("DELETE FROM keyword_documents WHERE keyword_type = $1")
            .bind(PROJECT_KEYWORD_TYPE)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Ranked full-text search over project documents.
    pub async fn search(
        pool: &PgPool,
        tsquery: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SearchHit>, sqlx::Error> {
        sqlx::query_as::<_, SearchHit>(
            "SELECT project_id, title, client_name,
                    ts_rank(search_vector, to_tsquery('english', $1)) AS rank
             FROM project_documents
             WHERE search_vector @@ to_tsquery('english', $1)
             ORDER BY rank DESC, project_id
             LIMIT $2 OFFSET $3",
        )
        .bind(tsquery)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Every project id whose document matches, best rank first. Feeds
    /// the project listing, which re-applies its own filters and
    /// pagination over this id set.
    pub async fn search_ids(pool: &PgPool, tsquery: &str) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT project_id
             FROM project_documents
             WHERE search_vector @@ to_tsquery('english', $1)
             ORDER BY ts_rank(search_vector, to_tsquery('english', $1)) DESC, project_id",
        )
        .bind(tsquery)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    /// Prefix search over the project keyword documents.
    pub async fn autocomplete(
        pool: &PgPool,
        tsquery: &str,
        limit: i64,
    ) -> Result<Vec<AutocompleteHit>, sqlx::Error> {
        sqlx::query_as::<_, AutocompleteHit>(
            "SELECT k.keyword_id, k.keyword, d.client_name
             FROM keyword_documents k
             LEFT JOIN project_documents d ON d.project_id = k.keyword_id
             WHERE k.keyword_type = $1
               AND k.search_vector @@ to_tsquery('simple', $2)
             ORDER BY k.keyword
             LIMIT $3",
        )
        .bind(PROJECT_KEYWORD_TYPE)
        .bind(tsquery)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Fetch one stored document, mainly for tests and diagnostics.
    pub async fn get_document(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<ProjectDocument>, sqlx::Error> {
        sqlx::query_as::<_, ProjectDocument>(
            "SELECT project_id, title, client_name, body, ac_search_field, indexed_at
             FROM project_documents WHERE project_id = $1",
        )
        .bind(project_id)
        .fetch_optional(pool)
        .await
    }
}
