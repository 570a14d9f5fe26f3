//! Note domain model.
//!
//! # Responsibility
//! - Define the titled, dated, owned unit of user content.
//! - Provide the preview projection used by the in-place viewer.
//!
//! # Invariants
//! - `title` is unique within one user's collection at any point in time.
//! - `id` is assigned once at creation and never reassigned. Deleting a
//!   note does not renumber survivors, so a delete followed by a create
//!   can repeat an id. Title, not id, is the lookup key.
//! - `tags` behaves as a set: adding an existing tag is a no-op.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Maximum number of characters shown by the preview projection.
pub const PREVIEW_MAX_CHARS: usize = 120;

const PREVIEW_ELLIPSIS: char = '\u{2026}';

/// A single user-owned note.
///
/// `reminder` and `tags` are omitted from the serialized form until first
/// set, matching the envelope shape expected by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Sequential per-user id, informational only (see module invariants).
    pub id: u32,
    /// Creation date as a `YYYY-MM-DD` string.
    pub date: String,
    /// Lookup key within the owning user's collection.
    pub title: String,
    /// Full note body.
    pub content: String,
    /// Optional reminder date string. Never validated as a date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<String>,
    /// Deduplicated tag set, sorted on iteration.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

impl Note {
    /// Creates a note with no reminder and no tags.
    pub fn new(
        id: u32,
        date: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            title: title.into(),
            content: content.into(),
            reminder: None,
            tags: BTreeSet::new(),
        }
    }

    /// Returns the truncated preview of the note body.
    ///
    /// The first [`PREVIEW_MAX_CHARS`] characters, with an ellipsis
    /// appended only when content was actually cut. Counts `char`s so
    /// multi-byte content is never split mid-character.
    pub fn preview(&self) -> String {
        truncate_chars(&self.content, PREVIEW_MAX_CHARS)
    }

    /// Returns whether `query` occurs in the title or body,
    /// case-insensitively.
    ///
    /// The empty query is a substring of everything and therefore matches
    /// every note.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
    }
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    let mut truncated: String = value.chars().take(max_chars).collect();
    if value.chars().count() > max_chars {
        truncated.push(PREVIEW_ELLIPSIS);
    }
    truncated
}
