//! Session token generation and hashing.
//!
//! Session tokens are opaque random strings handed to the browser in a
//! cookie. Only their SHA-256 hash is persisted, so a leaked `sessions`
//! table cannot be replayed.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Length of a generated session token in characters.
pub const SESSION_TOKEN_LENGTH: usize = 48;

/// A freshly generated session token.
#[derive(Debug, Clone)]
pub struct GeneratedSessionToken {
    /// Sent to the client; never stored.
    pub plaintext: String,
    /// SHA-256 hex digest of `plaintext`; stored in `sessions.token_hash`.
    pub hash: String,
}

/// Generate a new random session token.
pub fn generate_session_token() -> GeneratedSessionToken {
    let plaintext: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(SESSION_TOKEN_LENGTH)
        .map(char::from)
        .collect();

    let hash = hash_session_token(&plaintext);

    GeneratedSessionToken { plaintext, hash }
}

/// Compute the SHA-256 hex digest of a session token.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
