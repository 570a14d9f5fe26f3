//! Substring search over one user's notes.
//!
//! # Responsibility
//! - Provide keyword search across note titles and bodies.
//! - Return full note records in creation order.
//!
//! # Invariants
//! - Matching is case-insensitive substring containment.
//! - Result ordering is the owner's note creation order.
//! - The empty query is a substring of everything, so it returns the
//!   whole collection. That is the documented contract, not an accident
//!   to be filtered out.

use crate::model::note::Note;
use crate::repo::note_repo::NoteRepository;

/// Search options for one note-store query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Owner whose collection is searched.
    pub username: String,
    /// Raw query text, matched as a lowercase substring.
    pub text: String,
}

impl SearchQuery {
    pub fn new(username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            text: text.into(),
        }
    }
}

/// Searches a user's notes and returns matching records.
///
/// An unknown username yields an empty result, consistent with the
/// empty-collection reading of missing users everywhere else in core.
pub fn search_notes<R: NoteRepository>(repo: &R, query: &SearchQuery) -> Vec<Note> {
    repo.list_notes(&query.username)
        .into_iter()
        .filter(|note| note.matches(&query.text))
        .cloned()
        .collect()
}
