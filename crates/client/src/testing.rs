//! In-memory [`NotesApi`] for unit tests.

use std::sync::Mutex;

use chrono::Utc;
use notes_core::notes::{Category, CreateNote, Note};
use notes_core::types::DbId;

use crate::api::NotesApi;
use crate::error::ClientError;

pub fn category(id: DbId, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        color: "#888888".to_string(),
    }
}

pub fn note(id: DbId, category: Option<&Category>) -> Note {
    Note {
        id,
        title: format!("note {id}"),
        content: "body".to_string(),
        category_id: category.map(|c| c.id),
        user_id: 1,
        created_at: Utc::now(),
        category: category.cloned(),
    }
}

fn server_error() -> ClientError {
    ClientError::Api {
        status: 500,
        body: "{\"code\":\"INTERNAL_ERROR\"}".to_string(),
    }
}

pub struct FakeApi {
    notes: Vec<Note>,
    categories: Vec<Category>,
    fail_notes: bool,
    fail_categories: bool,
    fail_create: bool,
    created: Mutex<Vec<CreateNote>>,
}

impl FakeApi {
    pub fn new(notes: Vec<Note>, categories: Vec<Category>) -> Self {
        Self {
            notes,
            categories,
            fail_notes: false,
            fail_categories: false,
            fail_create: false,
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_notes(mut self) -> Self {
        self.fail_notes = true;
        self
    }

    pub fn failing_categories(mut self) -> Self {
        self.fail_categories = true;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    /// Every create request received so far.
    pub fn created(&self) -> Vec<CreateNote> {
        self.created.lock().unwrap().clone()
    }
}

impl NotesApi for FakeApi {
    async fn list_notes(&self) -> Result<Vec<Note>, ClientError> {
        if self.fail_notes {
            return Err(server_error());
        }
        Ok(self.notes.clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        if self.fail_categories {
            return Err(server_error());
        }
        Ok(self.categories.clone())
    }

    async fn create_note(&self, input: &CreateNote) -> Result<Note, ClientError> {
        self.created.lock().unwrap().push(input.clone());
        if self.fail_create {
            return Err(ClientError::Api {
                status: 400,
                body: "{\"code\":\"VALIDATION_ERROR\"}".to_string(),
            });
        }

        let category = input
            .category_id
            .and_then(|id| self.categories.iter().find(|c| c.id == id));
        let mut created = note(100, category);
        created.title = input.title.clone().unwrap_or_default();
        created.content = input.content.clone().unwrap_or_default();
        Ok(created)
    }
}
