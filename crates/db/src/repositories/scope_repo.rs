//! Repository for scope file and scope link attachments.
//!
//! Both sets are replaced in full on every project edit.

use sqlx::{PgConnection, PgPool};
use stafflane_core::types::DbId;

use crate::models::scope::{ScopeFile, ScopeLink, ScopeLinkInput};

pub struct ScopeRepo;

impl ScopeRepo {
    /// Replace the scope-file set. File names are derived from the last
    /// path segment of each link.
    pub async fn replace_files(
        conn: &mut PgConnection,
        project_id: DbId,
        links: &[String],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_scope_files WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *conn)
            .await?;
        for link in links {
            let name = link.rsplit('/').next().unwrap_or(link);
            sqlx::query(
                "INSERT INTO project_scope_files (project_id, name, link) VALUES ($1, $2, $3)",
            )
            .bind(project_id)
            .bind(name)
            .bind(link)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    /// Replace the scope-link set.
    pub async fn replace_links(
        conn: &mut PgConnection,
        project_id: DbId,
        links: &[ScopeLinkInput],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_scope_links WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *conn)
            .await?;
        for link in links {
            sqlx::query(
                "INSERT INTO project_scope_links (project_id, document_name, link, is_scope)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(project_id)
            .bind(&link.document_name)
            .bind(&link.link)
            .bind(link.is_scope)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    pub async fn list_files(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ScopeFile>, sqlx::Error> {
        sqlx::query_as::<_, ScopeFile>(
            "SELECT id, project_id, name, link, is_scope FROM project_scope_files
             WHERE project_id = $1 ORDER BY id",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    pub async fn list_links(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ScopeLink>, sqlx::Error> {
        sqlx::query_as::<_, ScopeLink>(
            "SELECT id, project_id, document_name, link, is_scope FROM project_scope_links
             WHERE project_id = $1 ORDER BY id",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }
}
