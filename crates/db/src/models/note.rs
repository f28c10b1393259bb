//! Note model.
//!
//! Notes are always read joined with their category, so the row struct
//! carries the category columns flattened and converts into
//! [`notes_core::notes::Note`] for the wire.

use notes_core::notes::{Category, Note};
use notes_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from `notes LEFT JOIN categories`.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category_id: Option<DbId>,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub category_name: Option<String>,
    pub category_color: Option<String>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        let category = match (row.category_id, row.category_name, row.category_color) {
            (Some(id), Some(name), Some(color)) => Some(Category { id, name, color }),
            _ => None,
        };

        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            category_id: row.category_id,
            user_id: row.user_id,
            created_at: row.created_at,
            category,
        }
    }
}
