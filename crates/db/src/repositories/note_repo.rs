//! Repository for the `notes` table.
//!
//! Every read joins `categories` so callers always receive a note together
//! with its category (or `None`).

use notes_core::notes::{NewNote, Note};
use notes_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::NoteRow;

/// Column list for `notes n LEFT JOIN categories c` queries.
const COLUMNS: &str = "\
    n.id, n.title, n.content, n.category_id, n.user_id, n.created_at, \
    c.name AS category_name, c.color AS category_color";

/// Provides create and per-owner listing for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a note owned by `user_id`, returning it joined with its category.
    pub async fn create(pool: &PgPool, user_id: DbId, input: &NewNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "WITH n AS (
                INSERT INTO notes (title, content, category_id, user_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id, title, content, category_id, user_id, created_at
             )
             SELECT {COLUMNS} FROM n
             LEFT JOIN categories c ON c.id = n.category_id"
        );
        let row = sqlx::query_as::<_, NoteRow>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.category_id)
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// List every note owned by `user_id`, newest first.
    ///
    /// Ties on `created_at` fall back to `id` so repeated reads agree.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes n
             LEFT JOIN categories c ON c.id = n.category_id
             WHERE n.user_id = $1
             ORDER BY n.created_at DESC, n.id DESC"
        );
        let rows = sqlx::query_as::<_, NoteRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Note::from).collect())
    }
}
