//! Request extractors for authentication.
//!
//! - [`auth::AuthUser`] -- Resolves the signed-in user from the session cookie.

pub mod auth;
