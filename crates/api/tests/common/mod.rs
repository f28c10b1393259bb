//! Shared harness for the API integration tests.
//!
//! Builds the production router over a `#[sqlx::test]` pool and provides
//! request helpers that optionally attach a session cookie.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use notes_api::auth::session::{session_cookie, sign_in, SessionConfig};
use notes_api::config::ServerConfig;
use notes_api::router::build_app_router;
use notes_api::state::AppState;
use notes_db::models::user::{CreateUser, User};
use sqlx::PgPool;
use tower::ServiceExt;

pub const COOKIE_NAME: &str = "notes_session";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session: session_config(),
    }
}

pub fn session_config() -> SessionConfig {
    SessionConfig {
        cookie_name: COOKIE_NAME.to_string(),
        ttl_hours: 1,
        secure_cookie: false,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A signed-in user together with the `Cookie` header value for its session,
/// rendered from the same cookie the sign-in callback would set.
pub struct TestUser {
    pub user: User,
    pub cookie: String,
}

/// Sign a user in through the same entry point the identity-provider
/// callback uses.
pub async fn sign_in_user(pool: &PgPool, email: &str) -> TestUser {
    let profile = CreateUser {
        email: email.to_string(),
        name: Some(email.split('@').next().unwrap_or(email).to_string()),
        image: None,
    };
    let signed_in = sign_in(pool, &session_config(), &profile)
        .await
        .expect("sign-in should succeed");

    TestUser {
        user: signed_in.user,
        cookie: session_cookie(&session_config(), signed_in.token)
            .stripped()
            .to_string(),
    }
}

/// Count every note row, regardless of owner.
pub async fn count_notes(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notes")
        .fetch_one(pool)
        .await
        .expect("count query should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    content_type: Option<&str>,
    body: Body,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(body).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    send(app, Method::GET, uri, cookie, None, Body::empty()).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    cookie: Option<&str>,
    json: serde_json::Value,
) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        cookie,
        Some("application/json"),
        Body::from(json.to_string()),
    )
    .await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    cookie: Option<&str>,
    body: &'static str,
) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        cookie,
        Some("application/json"),
        Body::from(body),
    )
    .await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
