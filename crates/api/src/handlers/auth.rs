//! Handlers for session introspection and sign-out.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;
use notes_core::error::CoreError;
use notes_core::types::{DbId, Timestamp};
use notes_db::repositories::UserRepo;
use serde::Serialize;

use crate::auth::session::{removal_cookie, sign_out};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Public view of the signed-in user.
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
}

/// Response body for `GET /api/auth/session`.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: SessionUser,
    pub expires: Timestamp,
}

/// GET /api/auth/session
///
/// Return the user behind the current session cookie.
pub async fn get_session(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await
        .map_err(AppError::store("SESSION_GET"))?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    tracing::debug!(user_id = user.id, session_id = auth.session_id, "Session resolved");

    Ok(Json(SessionResponse {
        user: SessionUser {
            id: user.id,
            email: user.email,
            name: user.name,
            image: user.image,
        },
        expires: auth.expires_at,
    }))
}

/// POST /api/auth/signout
///
/// Delete the session named by the cookie (if any) and clear the cookie.
/// Always returns 204 so repeated sign-outs are harmless.
pub async fn sign_out_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    let config = &state.config.session;

    if let Some(cookie) = jar.get(&config.cookie_name) {
        let ended = sign_out(&state.pool, cookie.value())
            .await
            .map_err(AppError::store("SIGNOUT_POST"))?;
        tracing::info!(ended, "Sign-out requested");
    }

    Ok((jar.remove(removal_cookie(config)), StatusCode::NO_CONTENT))
}
