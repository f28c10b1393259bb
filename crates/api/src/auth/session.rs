//! Cookie-backed sessions.
//!
//! A session is an opaque random token stored in the browser cookie and,
//! hashed, in the `sessions` table. The identity-provider callback calls
//! [`sign_in`] once the provider has vouched for an email address; the
//! returned token is then set with [`session_cookie`].

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use notes_core::session::{generate_session_token, hash_session_token};
use notes_core::types::Timestamp;
use notes_db::models::session::CreateSession;
use notes_db::models::user::{CreateUser, User};
use notes_db::repositories::{SessionRepo, UserRepo};
use sqlx::PgPool;

/// Default name of the session cookie.
pub const DEFAULT_COOKIE_NAME: &str = "notes_session";

/// Default session lifetime (30 days).
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24 * 30;

/// Session cookie configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session token.
    pub cookie_name: String,
    /// Lifetime of a newly issued session in hours.
    pub ttl_hours: i64,
    /// Whether to mark the cookie `Secure` (HTTPS only).
    pub secure_cookie: bool,
}

impl SessionConfig {
    /// Load session settings from environment variables.
    ///
    /// | Env Var                 | Default         |
    /// |-------------------------|-----------------|
    /// | `SESSION_COOKIE_NAME`   | `notes_session` |
    /// | `SESSION_TTL_HOURS`     | `720`           |
    /// | `SESSION_COOKIE_SECURE` | `true`          |
    pub fn from_env() -> Self {
        let cookie_name =
            std::env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| DEFAULT_COOKIE_NAME.into());

        let ttl_hours: i64 = std::env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_HOURS.to_string())
            .parse()
            .expect("SESSION_TTL_HOURS must be a valid i64");

        let secure_cookie = std::env::var("SESSION_COOKIE_SECURE")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        Self {
            cookie_name,
            ttl_hours,
            secure_cookie,
        }
    }
}

/// Result of a successful sign-in.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub user: User,
    /// Plaintext session token; goes into the cookie and nowhere else.
    pub token: String,
    pub expires_at: Timestamp,
}

/// Record a provider-verified sign-in and open a session for it.
///
/// The user row is created on first sign-in and its profile refreshed on
/// later ones. Any of the user's sessions that already expired are pruned.
pub async fn sign_in(
    pool: &PgPool,
    config: &SessionConfig,
    profile: &CreateUser,
) -> Result<SignedIn, sqlx::Error> {
    let user = UserRepo::upsert_by_email(pool, profile).await?;

    let pruned = SessionRepo::delete_expired_for_user(pool, user.id).await?;
    if pruned > 0 {
        tracing::debug!(user_id = user.id, pruned, "Pruned expired sessions");
    }

    let token = generate_session_token();
    let expires_at = Utc::now() + Duration::hours(config.ttl_hours);
    let session = SessionRepo::create(
        pool,
        &CreateSession {
            user_id: user.id,
            token_hash: token.hash,
            expires_at,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, session_id = session.id, "User signed in");

    Ok(SignedIn {
        user,
        token: token.plaintext,
        expires_at: session.expires_at,
    })
}

/// End the session identified by `token`. Returns `true` if one existed.
pub async fn sign_out(pool: &PgPool, token: &str) -> Result<bool, sqlx::Error> {
    SessionRepo::delete_by_token_hash(pool, &hash_session_token(token)).await
}

/// Build the cookie that carries a session token.
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(config.secure_cookie)
        .same_site(SameSite::Lax)
        .build()
}

/// Build the cookie used to clear the session cookie on sign-out.
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), "")).path("/").build()
}
