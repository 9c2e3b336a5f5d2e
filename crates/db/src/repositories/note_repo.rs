//! Repositories for project and freelancer notes.
//!
//! Permission checks (author-only edit/delete, ownerless claim) live in
//! the service layer; this module is plain row access.

use sqlx::{PgConnection, PgPool};
use stafflane_core::types::DbId;

use crate::models::note::{FreelancerNote, NoteWithAuthor, ProjectNote};

const PROJECT_NOTE_COLUMNS: &str = "id, project_id, admin_id, note, created_at, modified_at";
const FREELANCER_NOTE_COLUMNS: &str =
    "id, freelancer_id, project_id, admin_id, note, created_at, modified_at";

pub struct NoteRepo;

impl NoteRepo {
    // -- project notes ------------------------------------------------------

    pub async fn create_project_note(
        conn: &mut PgConnection,
        project_id: DbId,
        admin_id: DbId,
        note: &str,
    ) -> Result<ProjectNote, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_notes (project_id, admin_id, note) VALUES ($1, $2, $3)
             RETURNING {PROJECT_NOTE_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectNote>(&query)
            .bind(project_id)
            .bind(admin_id)
            .bind(note)
            .fetch_one(conn)
            .await
    }

    pub async fn find_project_note(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<ProjectNote>, sqlx::Error> {
        let query = format!("SELECT {PROJECT_NOTE_COLUMNS} FROM project_notes WHERE id = $1");
        sqlx::query_as::<_, ProjectNote>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Rewrite the note body and stamp the author. An ownerless note gains
    /// its first editor as owner through the same statement.
    pub async fn update_project_note(
        conn: &mut PgConnection,
        id: DbId,
        admin_id: DbId,
        note: &str,
    ) -> Result<ProjectNote, sqlx::Error> {
        let query = format!(
            "UPDATE project_notes SET note = $2, admin_id = $3, modified_at = NOW()
             WHERE id = $1
             RETURNING {PROJECT_NOTE_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectNote>(&query)
            .bind(id)
            .bind(note)
            .bind(admin_id)
            .fetch_one(conn)
            .await
    }

    pub async fn delete_project_note(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_notes WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Notes for a project with author info, newest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<NoteWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, NoteWithAuthor>(
            "SELECT n.id, n.admin_id, n.note, n.created_at,
                    a.name AS author_name, a.email AS author_email
             FROM project_notes n
             LEFT JOIN admins a ON a.id = n.admin_id
             WHERE n.project_id = $1
             ORDER BY n.created_at DESC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    // -- freelancer notes ---------------------------------------------------

    pub async fn create_freelancer_note(
        conn: &mut PgConnection,
        freelancer_id: DbId,
        project_id: Option<DbId>,
        admin_id: DbId,
        note: &str,
    ) -> Result<FreelancerNote, sqlx::Error> {
        let query = format!(
            "INSERT INTO freelancer_notes (freelancer_id, project_id, admin_id, note)
             VALUES ($1, $2, $3, $4)
             RETURNING {FREELANCER_NOTE_COLUMNS}"
        );
        sqlx::query_as::<_, FreelancerNote>(&query)
            .bind(freelancer_id)
            .bind(project_id)
            .bind(admin_id)
            .bind(note)
            .fetch_one(conn)
            .await
    }

    pub async fn find_freelancer_note(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<FreelancerNote>, sqlx::Error> {
        let query = format!("SELECT {FREELANCER_NOTE_COLUMNS} FROM freelancer_notes WHERE id = $1");
        sqlx::query_as::<_, FreelancerNote>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    pub async fn update_freelancer_note(
        conn: &mut PgConnection,
        id: DbId,
        admin_id: DbId,
        note: &str,
    ) -> Result<FreelancerNote, sqlx::Error> {
        let query = format!(
            "UPDATE freelancer_notes SET note = $2, admin_id = $3, modified_at = NOW()
             WHERE id = $1
             RETURNING {FREELANCER_NOTE_COLUMNS}"
        );
        sqlx::query_as::<_, FreelancerNote>(&query)
            .bind(id)
            .bind(note)
            .bind(admin_id)
            .fetch_one(conn)
            .await
    }

    pub async fn delete_freelancer_note(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM freelancer_notes WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Notes for a freelancer with author info, newest first.
    pub async fn list_for_freelancer(
        pool: &PgPool,
        freelancer_id: DbId,
    ) -> Result<Vec<NoteWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, NoteWithAuthor>(
            "SELECT n.id, n.admin_id, n.note, n.created_at,
                    a.name AS author_name, a.email AS author_email
             FROM freelancer_notes n
             LEFT JOIN admins a ON a.id = n.admin_id
             WHERE n.freelancer_id = $1
             ORDER BY n.created_at DESC",
        )
        .bind(freelancer_id)
        .fetch_all(pool)
        .await
    }
}
