//! Transport between the page state and the notes server.
//!
//! [`NotesApi`] is the seam the page and dialog are written against;
//! [`HttpNotesApi`] implements it with [`reqwest`], sending the session
//! token as a cookie on every request.

use std::future::Future;

use notes_core::notes::{Category, CreateNote, Note};
use reqwest::header::COOKIE;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Operations the client needs from the notes server.
pub trait NotesApi: Send + Sync {
    /// `GET /api/notes`: the caller's notes, newest first.
    fn list_notes(&self) -> impl Future<Output = Result<Vec<Note>, ClientError>> + Send;

    /// `GET /api/categories`: every category, ordered by name.
    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, ClientError>> + Send;

    /// `POST /api/notes`: create a note and return the stored record.
    fn create_note(
        &self,
        input: &CreateNote,
    ) -> impl Future<Output = Result<Note, ClientError>> + Send;
}

/// HTTP client for a notes server.
pub struct HttpNotesApi {
    client: reqwest::Client,
    api_url: String,
    cookie: Option<String>,
}

impl HttpNotesApi {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        let cookie = config
            .session_token
            .as_ref()
            .map(|token| format!("{}={}", config.cookie_name, token));

        Self {
            client,
            api_url: config.api_url.clone(),
            cookie,
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.api_url, path));
        match &self.cookie {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }

    /// Turn a non-2xx response into [`ClientError::Api`], otherwise decode
    /// the JSON body.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

impl NotesApi for HttpNotesApi {
    async fn list_notes(&self) -> Result<Vec<Note>, ClientError> {
        let response = self
            .request(reqwest::Method::GET, "/api/notes")
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let response = self
            .request(reqwest::Method::GET, "/api/categories")
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn create_note(&self, input: &CreateNote) -> Result<Note, ClientError> {
        let response = self
            .request(reqwest::Method::POST, "/api/notes")
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }
}
