//! Domain types shared by the notes server and its client.
//!
//! - [`types`] -- primary key and timestamp aliases.
//! - [`error`] -- [`error::CoreError`], the domain error taxonomy.
//! - [`notes`] -- note/category wire records and note validation.
//! - [`session`] -- opaque session token generation and hashing.

pub mod error;
pub mod notes;
pub mod session;
pub mod types;
