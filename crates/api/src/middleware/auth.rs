//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use notes_core::error::CoreError;
use notes_core::session::hash_session_token;
use notes_core::types::{DbId, Timestamp};
use notes_db::repositories::SessionRepo;

use crate::error::AppError;
use crate::state::AppState;

/// Log tag for store failures while resolving the session cookie.
pub const SESSION_LOOKUP: &str = "SESSION_LOOKUP";

/// Authenticated user resolved from the session cookie.
///
/// Use this as an extractor parameter in any handler that requires authentication.
/// Requests without a cookie, or whose session is unknown or expired, are
/// rejected with 401 before the handler body runs:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The signed-in user's id.
    pub user_id: DbId,
    /// The `sessions` row backing this request.
    pub session_id: DbId,
    /// When the backing session stops being accepted.
    pub expires_at: Timestamp,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(&state.config.session.cookie_name)
            .map(|cookie| cookie.value())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not signed in".into())))?;

        let session = SessionRepo::find_active_by_token_hash(&state.pool, &hash_session_token(token))
            .await
            .map_err(AppError::store(SESSION_LOOKUP))?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Session is invalid or expired".into(),
                ))
            })?;

        Ok(AuthUser {
            user_id: session.user_id,
            session_id: session.id,
            expires_at: session.expires_at,
        })
    }
}
