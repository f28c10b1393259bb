//! State behind the notes page.
//!
//! The page loads every note and category once, filters by the selected
//! category locally, and prepends notes created through the dialog without
//! re-fetching.

use notes_core::notes::{Category, Note};

use crate::api::NotesApi;
use crate::error::ClientError;

/// Heading shown when no category is selected.
pub const ALL_NOTES_HEADING: &str = "All Notes";

/// Label shown for a note without a category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesPage {
    selected_category: Option<Category>,
    notes: Vec<Note>,
    categories: Vec<Category>,
}

impl NotesPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch notes and categories concurrently.
    ///
    /// Both lists are adopted only when both requests succeed. On failure the
    /// error is logged, the current lists are left untouched, and the error is
    /// returned to the caller.
    pub async fn load<A: NotesApi>(&mut self, api: &A) -> Result<(), ClientError> {
        let (notes, categories) = tokio::join!(api.list_notes(), api.list_categories());

        match (notes, categories) {
            (Ok(notes), Ok(categories)) => {
                tracing::debug!(
                    notes = notes.len(),
                    categories = categories.len(),
                    "Notes page loaded"
                );
                self.notes = notes;
                self.categories = categories;
                Ok(())
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::error!(error = %err, "Failed to load notes page");
                Err(err)
            }
        }
    }

    /// Select a category to filter by, or `None` for all notes.
    pub fn select_category(&mut self, category: Option<Category>) {
        self.selected_category = category;
    }

    /// Notes matching the selected category, in list order.
    pub fn visible_notes(&self) -> Vec<&Note> {
        match &self.selected_category {
            Some(selected) => self
                .notes
                .iter()
                .filter(|note| note.category_id == Some(selected.id))
                .collect(),
            None => self.notes.iter().collect(),
        }
    }

    /// Record a note returned by the server as the newest entry.
    pub fn handle_note_create(&mut self, note: Note) {
        self.notes.insert(0, note);
    }

    pub fn heading(&self) -> &str {
        self.selected_category
            .as_ref()
            .map_or(ALL_NOTES_HEADING, |category| category.name.as_str())
    }

    pub fn category_label(note: &Note) -> &str {
        note.category
            .as_ref()
            .map_or(UNCATEGORIZED_LABEL, |category| category.name.as_str())
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.selected_category.as_ref()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}
