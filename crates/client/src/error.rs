use notes_core::error::CoreError;

/// Errors from the notes HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The form failed local validation and nothing was sent.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Notes API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ClientError {
    /// The HTTP status for [`ClientError::Api`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            Self::Invalid(_) => None,
        }
    }
}
