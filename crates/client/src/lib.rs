//! Client-side state for the notes page.
//!
//! [`page::NotesPage`] holds the loaded notes and categories and derives the
//! filtered view; [`dialog::NoteDialog`] holds the creation form. Both talk to
//! the server through the [`api::NotesApi`] trait, implemented over HTTP by
//! [`api::HttpNotesApi`].

pub mod api;
pub mod config;
pub mod dialog;
pub mod error;
pub mod page;

#[cfg(test)]
mod testing;
