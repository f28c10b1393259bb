//! Category model and DTOs.

use notes_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
    /// Hex color; the column default (`#888888`) applies when `None`.
    pub color: Option<String>,
}

impl From<Category> for notes_core::notes::Category {
    fn from(row: Category) -> Self {
        Self {
            id: row.id,
            name: row.name,
            color: row.color,
        }
    }
}
