//! State behind the note creation dialog.

use notes_core::notes::{CreateNote, Note};
use notes_core::types::DbId;

use crate::api::NotesApi;
use crate::error::ClientError;

/// Form state for creating a note. Everything starts empty and closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDialog {
    pub open: bool,
    pub title: String,
    pub content: String,
    /// `None` means no category was picked and is sent as `null`.
    pub category_id: Option<DbId>,
}

impl NoteDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_dialog(&mut self) {
        self.open = true;
    }

    /// Close without submitting. Typed values are kept for the next open.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// The request body for the current form values.
    pub fn to_request(&self) -> CreateNote {
        CreateNote {
            title: Some(self.title.clone()),
            content: Some(self.content.clone()),
            category_id: self.category_id,
        }
    }

    /// Post the form to the server.
    ///
    /// A blank title or content is refused locally without a request. On
    /// success `on_create` receives the stored note, the fields reset, and
    /// the dialog closes. On failure the error is logged and returned while
    /// the form stays open with its values intact.
    pub async fn submit<A, F>(&mut self, api: &A, on_create: F) -> Result<(), ClientError>
    where
        A: NotesApi,
        F: FnOnce(Note),
    {
        let request = self.to_request();
        if let Err(err) = request.clone().validate() {
            tracing::warn!(error = %err, "Note form incomplete");
            return Err(err.into());
        }

        match api.create_note(&request).await {
            Ok(note) => {
                tracing::info!(note_id = note.id, "Note created");
                on_create(note);
                *self = Self::default();
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to create note");
                Err(err)
            }
        }
    }
}
