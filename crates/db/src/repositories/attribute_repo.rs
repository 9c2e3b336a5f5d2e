//! Repository for the `project_attribute_map` table and its lookups.

use sqlx::{PgConnection, PgPool};
use stafflane_core::attribute::AttributeKind;
use stafflane_core::types::DbId;

use crate::models::attribute::LookupItem;

/// Generic attribute associations between projects and lookup tables.
pub struct AttributeRepo;

impl AttributeRepo {
    /// Replace the full attribute set of one kind for a project.
    ///
    /// Lookup values that do not exist yet are created on the fly, so
    /// callers can submit free-form names. The operation is a delete of
    /// every existing association of that kind followed by re-insertion,
    /// which makes it idempotent for identical inputs.
    pub async fn replace(
        conn: &mut PgConnection,
        project_id: DbId,
        kind: AttributeKind,
        names: &[String],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_attribute_map WHERE project_id = $1 AND map_name = $2")
            .bind(project_id)
            .bind(kind.as_str())
            .execute(&mut *conn)
            .await?;

        for name in names {
            let map_id = Self::resolve_lookup(conn, kind, name).await?;
            // ON CONFLICT absorbs duplicate names within one request.
            sqlx::query(
                "INSERT INTO project_attribute_map (project_id, map_name, map_id)
                 VALUES ($1, $2, $3)
                 ON CONFLICT ON CONSTRAINT uq_project_attribute DO NOTHING",
            )
            .bind(project_id)
            .bind(kind.as_str())
            .bind(map_id)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    /// Find or create a lookup row by name, returning its ID.
    async fn resolve_lookup(
        conn: &mut PgConnection,
        kind: AttributeKind,
        name: &str,
    ) -> Result<DbId, sqlx::Error> {
        // Table name comes from the fixed registry, never from user input.
        let query = format!(
            "INSERT INTO {} (name) VALUES ($1)
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
             RETURNING id",
            kind.lookup_table()
        );
        let row: (DbId,) = sqlx::query_as(&query).bind(name).fetch_one(conn).await?;
        Ok(row.0)
    }

    /// All lookup items of one kind associated with a project.
    pub async fn list(
        pool: &PgPool,
        project_id: DbId,
        kind: AttributeKind,
    ) -> Result<Vec<LookupItem>, sqlx::Error> {
        let query = format!(
            "SELECT t.id, t.name FROM {} t
             JOIN project_attribute_map m ON m.map_id = t.id AND m.map_name = $2
             WHERE m.project_id = $1
             ORDER BY t.name",
            kind.lookup_table()
        );
        sqlx::query_as::<_, LookupItem>(&query)
            .bind(project_id)
            .bind(kind.as_str())
            .fetch_all(pool)
            .await
    }
}
