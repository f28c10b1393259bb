//! Handler for the category listing consumed by the notes page.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use notes_core::notes::Category;
use notes_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/categories
///
/// List all categories as `{ id, name, color }`, ordered by name.
pub async fn list_categories(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let categories: Vec<Category> = CategoryRepo::list(&state.pool)
        .await
        .map_err(AppError::store("CATEGORIES_GET"))?
        .into_iter()
        .map(Category::from)
        .collect();

    Ok(Json(categories))
}
