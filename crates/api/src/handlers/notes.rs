//! Handlers for the notes endpoints.
//!
//! Both endpoints require a session via [`AuthUser`]; notes are always
//! scoped to the signed-in user.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use notes_core::notes::CreateNote;
use notes_db::repositories::{CategoryRepo, NoteRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Log tag for failures in [`create_note`].
const NOTES_POST: &str = "NOTES_POST";

/// Log tag for failures in [`list_notes`].
const NOTES_GET: &str = "NOTES_GET";

/// POST /api/notes
///
/// Create a note owned by the signed-in user and return it joined with its
/// category. An absent or `null` `categoryId` leaves the note uncategorized.
pub async fn create_note(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateNote>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let new_note = input.validate()?;

    if let Some(category_id) = new_note.category_id {
        CategoryRepo::find_by_id(&state.pool, category_id)
            .await
            .map_err(AppError::store(NOTES_POST))?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Category with id {category_id} does not exist"))
            })?;
    }

    let note = NoteRepo::create(&state.pool, auth.user_id, &new_note)
        .await
        .map_err(AppError::store(NOTES_POST))?;

    tracing::info!(
        user_id = auth.user_id,
        note_id = note.id,
        category_id = ?note.category_id,
        "Note created"
    );

    Ok(Json(note))
}

/// GET /api/notes
///
/// List the signed-in user's notes, newest first.
pub async fn list_notes(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let notes = NoteRepo::list_for_user(&state.pool, auth.user_id)
        .await
        .map_err(AppError::store(NOTES_GET))?;

    tracing::debug!(user_id = auth.user_id, count = notes.len(), "Notes listed");

    Ok(Json(notes))
}
