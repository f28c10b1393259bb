use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes.
///
/// ```text
/// GET    /notes    -> list_notes
/// POST   /notes    -> create_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/notes", get(notes::list_notes).post(notes::create_note))
}
