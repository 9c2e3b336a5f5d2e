//! Repository for the `admins` table.

use sqlx::{PgConnection, PgPool};
use stafflane_core::types::DbId;

use crate::models::admin::Admin;

pub struct AdminRepo;

impl AdminRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>("SELECT id, name, email FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Transactional variant used while assembling notification recipients.
    pub async fn find_by_id_tx(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>("SELECT id, name, email FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(conn)
            .await
    }
}
