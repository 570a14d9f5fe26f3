//! Note use-case service.
//!
//! # Responsibility
//! - Provide per-user note create/read/edit/delete/search APIs.
//! - Derive the preview and full-view projections.
//! - Union tags and attach reminder dates.
//!
//! # Invariants
//! - `edit_note` uses full content replacement semantics and never
//!   touches id, date, tags, or reminder.
//! - A new note's id is the current note count plus one. Ids are never
//!   reissued on delete, so they are informational, not lookup keys.
//! - All lookups go by title; a missing user and a missing title both
//!   surface as `NotFound`.

use crate::model::note::Note;
use crate::repo::note_repo::NoteRepository;
use crate::repo::RepoError;
use crate::search::{search_notes, SearchQuery};
use chrono::Local;
use log::{debug, info};
use serde::Serialize;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteServiceError {
    /// The user already owns a note with this title.
    DuplicateTitle(String),
    /// No note with this title exists for the user.
    NotFound(String),
    /// Storage-layer failure outside the note taxonomy.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateTitle(title) => write!(f, "note title already exists: `{title}`"),
            Self::NotFound(title) => write!(f, "note not found: `{title}`"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateTitle(title) => Self::DuplicateTitle(title),
            other => Self::Repo(other),
        }
    }
}

/// Compact projection for the in-place viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotePreview {
    pub title: String,
    /// First 120 characters of the body, ellipsis appended if truncated.
    pub preview: String,
    pub date: String,
}

/// Full projection for the full-page viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteView {
    pub title: String,
    pub content: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

/// Note store facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a note dated today and returns the stored record.
    ///
    /// # Contract
    /// - Rejects a title the user already owns without mutating anything.
    /// - Assigns `id = note_count + 1` at the moment of creation.
    pub fn create_note(
        &mut self,
        username: &str,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Note, NoteServiceError> {
        let id = self.repo.note_count(username) as u32 + 1;
        let note = Note::new(id, today(), title, content);
        let created = note.clone();
        self.repo.insert_note(username, note)?;
        info!(
            "event=note_created module=notes status=ok user={username} id={}",
            created.id
        );
        Ok(created)
    }

    /// Gets one note by title.
    ///
    /// Missing user and missing title both collapse to `None`; neither is
    /// an error at this level.
    pub fn get_note(&self, username: &str, title: &str) -> Option<Note> {
        self.repo.get_note(username, title).cloned()
    }

    /// Returns the in-place viewer projection for one note.
    pub fn preview_view(
        &self,
        username: &str,
        title: &str,
    ) -> Result<NotePreview, NoteServiceError> {
        let note = self
            .repo
            .get_note(username, title)
            .ok_or_else(|| NoteServiceError::NotFound(title.to_string()))?;
        Ok(NotePreview {
            title: note.title.clone(),
            preview: note.preview(),
            date: note.date.clone(),
        })
    }

    /// Returns the full viewer projection for one note.
    pub fn full_view(&self, username: &str, title: &str) -> Result<NoteView, NoteServiceError> {
        let note = self
            .repo
            .get_note(username, title)
            .ok_or_else(|| NoteServiceError::NotFound(title.to_string()))?;
        Ok(NoteView {
            title: note.title.clone(),
            content: note.content.clone(),
            date: note.date.clone(),
            reminder: note.reminder.clone(),
            tags: note.tags.clone(),
        })
    }

    /// Replaces note content in place.
    pub fn edit_note(
        &mut self,
        username: &str,
        title: &str,
        new_content: impl Into<String>,
    ) -> Result<(), NoteServiceError> {
        let note = self
            .repo
            .get_note_mut(username, title)
            .ok_or_else(|| NoteServiceError::NotFound(title.to_string()))?;
        note.content = new_content.into();
        debug!("event=note_edited module=notes status=ok user={username}");
        Ok(())
    }

    /// Deletes one note by title.
    ///
    /// Surviving notes keep their ids; a second delete on the same title
    /// is `NotFound`.
    pub fn delete_note(&mut self, username: &str, title: &str) -> Result<(), NoteServiceError> {
        self.repo
            .remove_note(username, title)
            .ok_or_else(|| NoteServiceError::NotFound(title.to_string()))?;
        info!("event=note_deleted module=notes status=ok user={username}");
        Ok(())
    }

    /// Searches the user's notes by case-insensitive substring.
    ///
    /// Returns full note records in creation order. The empty query
    /// matches every note (see [`crate::search`]).
    pub fn search_notes(&self, username: &str, query: &str) -> Vec<Note> {
        search_notes(&self.repo, &SearchQuery::new(username, query))
    }

    /// Attaches or overwrites the reminder date string on one note.
    ///
    /// The value is stored verbatim; no date-format validation happens at
    /// this scope.
    pub fn set_reminder(
        &mut self,
        username: &str,
        title: &str,
        reminder_date: impl Into<String>,
    ) -> Result<(), NoteServiceError> {
        let note = self
            .repo
            .get_note_mut(username, title)
            .ok_or_else(|| NoteServiceError::NotFound(title.to_string()))?;
        note.reminder = Some(reminder_date.into());
        debug!("event=reminder_set module=notes status=ok user={username}");
        Ok(())
    }

    /// Unions the given tags into the note's tag set.
    ///
    /// Duplicates are absorbed by set semantics, so repeated addition of
    /// the same tag is idempotent. Returns the resulting sorted tag list.
    pub fn add_tags(
        &mut self,
        username: &str,
        title: &str,
        tags: Vec<String>,
    ) -> Result<Vec<String>, NoteServiceError> {
        let note = self
            .repo
            .get_note_mut(username, title)
            .ok_or_else(|| NoteServiceError::NotFound(title.to_string()))?;
        note.tags.extend(tags);
        Ok(note.tags.iter().cloned().collect())
    }
}

fn today() -> String {
    Local::now().date_naive().to_string()
}

#[cfg(test)]
mod tests {
    use super::today;

    #[test]
    fn today_formats_as_iso_calendar_date() {
        let stamp = today();
        assert_eq!(stamp.len(), 10);
        let parts: Vec<&str> = stamp.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|part| part.chars().all(char::is_numeric)));
    }
}
