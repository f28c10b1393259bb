pub mod auth;
pub mod categories;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notes                 list (GET), create (POST)      requires session
/// /categories            list (GET)                     requires session
/// /auth/session          current session user (GET)     requires session
/// /auth/signout          end session (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(notes::router())
        .merge(categories::router())
        .merge(auth::router())
}
