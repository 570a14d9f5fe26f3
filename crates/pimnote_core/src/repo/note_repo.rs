//! Note repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide per-user note storage with O(1) title lookup.
//! - Preserve creation order separately so list/search iterate in the
//!   order notes were created.
//!
//! # Invariants
//! - Within one user's collection, titles are unique at any point in
//!   time; `insert_note` rejects duplicates and there is no rename.
//! - A username with no prior notes owns an empty collection, never an
//!   error.
//! - Removing a note drops it from both the title map and the order
//!   list; surviving notes keep their ids.

use crate::model::note::Note;
use crate::repo::{RepoError, RepoResult};
use std::collections::HashMap;

/// Repository interface for per-user note collections.
pub trait NoteRepository {
    /// Appends a note to the user's collection, rejecting duplicate
    /// titles.
    fn insert_note(&mut self, username: &str, note: Note) -> RepoResult<()>;
    /// Looks up one note by title.
    fn get_note(&self, username: &str, title: &str) -> Option<&Note>;
    /// Looks up one note by title for in-place mutation.
    fn get_note_mut(&mut self, username: &str, title: &str) -> Option<&mut Note>;
    /// Removes and returns one note by title.
    fn remove_note(&mut self, username: &str, title: &str) -> Option<Note>;
    /// Lists the user's notes in creation order.
    fn list_notes(&self, username: &str) -> Vec<&Note>;
    /// Number of notes currently held for the user.
    fn note_count(&self, username: &str) -> usize;
}

/// One user's notes: title map for lookup, title list for order.
#[derive(Debug, Default)]
struct NoteCollection {
    by_title: HashMap<String, Note>,
    order: Vec<String>,
}

/// Process-local note store keyed by owning username.
#[derive(Debug, Default)]
pub struct MemoryNoteRepository {
    users: HashMap<String, NoteCollection>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteRepository for MemoryNoteRepository {
    fn insert_note(&mut self, username: &str, note: Note) -> RepoResult<()> {
        let collection = self.users.entry(username.to_string()).or_default();
        if collection.by_title.contains_key(&note.title) {
            return Err(RepoError::DuplicateTitle(note.title));
        }
        collection.order.push(note.title.clone());
        collection.by_title.insert(note.title.clone(), note);
        Ok(())
    }

    fn get_note(&self, username: &str, title: &str) -> Option<&Note> {
        self.users
            .get(username)
            .and_then(|collection| collection.by_title.get(title))
    }

    fn get_note_mut(&mut self, username: &str, title: &str) -> Option<&mut Note> {
        self.users
            .get_mut(username)
            .and_then(|collection| collection.by_title.get_mut(title))
    }

    fn remove_note(&mut self, username: &str, title: &str) -> Option<Note> {
        let collection = self.users.get_mut(username)?;
        let removed = collection.by_title.remove(title)?;
        collection.order.retain(|held| held != title);
        Some(removed)
    }

    fn list_notes(&self, username: &str) -> Vec<&Note> {
        let Some(collection) = self.users.get(username) else {
            return Vec::new();
        };
        collection
            .order
            .iter()
            .filter_map(|title| collection.by_title.get(title))
            .collect()
    }

    fn note_count(&self, username: &str) -> usize {
        self.users
            .get(username)
            .map(|collection| collection.by_title.len())
            .unwrap_or(0)
    }
}
