use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Session routes.
///
/// ```text
/// GET    /auth/session    -> get_session
/// POST   /auth/signout    -> sign_out_handler
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/session", get(auth::get_session))
        .route("/auth/signout", post(auth::sign_out_handler))
}
