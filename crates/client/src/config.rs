/// Default base URL of the notes server.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Default name of the session cookie sent with every request.
pub const DEFAULT_COOKIE_NAME: &str = "notes_session";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server, without a trailing slash.
    pub api_url: String,
    /// Session token issued at sign-in, if any.
    pub session_token: Option<String>,
    /// Cookie name the server expects the token under.
    pub cookie_name: String,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable              | Default                  |
    /// |-----------------------|--------------------------|
    /// | `NOTES_API_URL`       | `http://localhost:3000`  |
    /// | `NOTES_SESSION_TOKEN` | unset                    |
    /// | `SESSION_COOKIE_NAME` | `notes_session`          |
    pub fn from_env() -> Self {
        let api_url = std::env::var("NOTES_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let session_token = std::env::var("NOTES_SESSION_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());
        let cookie_name =
            std::env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| DEFAULT_COOKIE_NAME.into());

        Self::new(api_url, session_token, cookie_name)
    }

    /// Build a config from explicit values, normalizing the base URL.
    pub fn new(api_url: String, session_token: Option<String>, cookie_name: String) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            session_token,
            cookie_name,
        }
    }
}
