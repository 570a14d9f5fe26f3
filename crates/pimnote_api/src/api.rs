//! Use-case API returning JSON envelope strings.
//!
//! # Responsibility
//! - Expose one method per PIM operation over an owned store pair.
//! - Map service errors to the envelope message vocabulary.
//!
//! # Invariants
//! - Methods never panic; serialization failures degrade to a literal
//!   failure envelope.
//! - The facade performs no authorization: callers pass the username they
//!   consider authenticated, and note operations trust it as-is.

use crate::envelope::{
    ActionEnvelope, MarkdownEnvelope, NoteEnvelope, PreviewEnvelope, SearchEnvelope,
    TagsEnvelope, ViewEnvelope,
};
use log::error;
use pimnote_core::{
    render_markdown, AccountService, AccountServiceError, MemoryAccountRepository,
    MemoryNoteRepository, NoteService, NoteServiceError,
};
use serde::Serialize;

const MSG_USER_REGISTERED: &str = "User registered successfully";
const MSG_USER_EXISTS: &str = "User already exists";
const MSG_LOGIN_OK: &str = "Login successful";
const MSG_LOGIN_FAIL: &str = "Invalid username or password";
const MSG_LOGOUT_OK: &str = "Logout successful";
const MSG_NOTE_CREATED: &str = "Note created";
const MSG_TITLE_EXISTS: &str = "Note title already exists";
const MSG_NOTE_UPDATED: &str = "Note updated";
const MSG_NOTE_DELETED: &str = "Note deleted";
const MSG_NOTE_NOT_FOUND: &str = "Note not found";

/// Process-wide PIM facade: one account directory plus one note store,
/// constructed once and passed to every caller.
///
/// There is no hidden global state; tests build their own instance.
pub struct Pim {
    accounts: AccountService<MemoryAccountRepository>,
    notes: NoteService<MemoryNoteRepository>,
}

impl Default for Pim {
    fn default() -> Self {
        Self::new()
    }
}

impl Pim {
    /// Creates an empty facade with fresh in-memory stores.
    pub fn new() -> Self {
        Self {
            accounts: AccountService::new(MemoryAccountRepository::new()),
            notes: NoteService::new(MemoryNoteRepository::new()),
        }
    }

    /// Registers a new user.
    ///
    /// Envelope: `{"success": bool, "message": str}`.
    pub fn register_user(&mut self, username: &str, password: &str) -> String {
        let envelope = match self.accounts.register(username, password) {
            Ok(()) => ActionEnvelope::ok(MSG_USER_REGISTERED),
            Err(err) => ActionEnvelope::fail(account_message(&err)),
        };
        to_json(&envelope)
    }

    /// Authenticates an existing user.
    ///
    /// Envelope: `{"success": bool, "message": str}`. The failure message
    /// never distinguishes unknown username from wrong password.
    pub fn login_user(&self, username: &str, password: &str) -> String {
        let envelope = match self.accounts.authenticate(username, password) {
            Ok(()) => ActionEnvelope::ok(MSG_LOGIN_OK),
            Err(err) => ActionEnvelope::fail(account_message(&err)),
        };
        to_json(&envelope)
    }

    /// Acknowledges a logout. Always succeeds.
    pub fn logout_user(&self, username: &str) -> String {
        self.accounts.logout(username);
        to_json(&ActionEnvelope::ok(MSG_LOGOUT_OK))
    }

    /// Creates a note for a user.
    ///
    /// Envelope: `{"success": bool, "message": str}`.
    pub fn create_note(&mut self, username: &str, title: &str, content: &str) -> String {
        let envelope = match self.notes.create_note(username, title, content) {
            Ok(_) => ActionEnvelope::ok(MSG_NOTE_CREATED),
            Err(err) => ActionEnvelope::fail(note_message(&err)),
        };
        to_json(&envelope)
    }

    /// Retrieves a note by title.
    ///
    /// Envelope: `{"success": bool, "note": object|null}`.
    pub fn get_note(&self, username: &str, title: &str) -> String {
        let envelope = match self.notes.get_note(username, title) {
            Some(note) => NoteEnvelope::found(note),
            None => NoteEnvelope::not_found(),
        };
        to_json(&envelope)
    }

    /// In-place viewer: short preview of the note content.
    ///
    /// Envelope: `{"success", "title", "preview", "date"}` on hit.
    pub fn preview_view(&self, username: &str, title: &str) -> String {
        let envelope = match self.notes.preview_view(username, title) {
            Ok(preview) => PreviewEnvelope::found(preview),
            Err(err) => PreviewEnvelope::not_found(note_message(&err)),
        };
        to_json(&envelope)
    }

    /// Full viewer: the complete note.
    ///
    /// Envelope: `{"success", "title", "content", "date"}` plus
    /// `reminder`/`tags` when set.
    pub fn full_view(&self, username: &str, title: &str) -> String {
        let envelope = match self.notes.full_view(username, title) {
            Ok(view) => ViewEnvelope::found(view),
            Err(err) => ViewEnvelope::not_found(note_message(&err)),
        };
        to_json(&envelope)
    }

    /// Replaces the content of a note.
    pub fn edit_note(&mut self, username: &str, title: &str, new_content: &str) -> String {
        let envelope = match self.notes.edit_note(username, title, new_content) {
            Ok(()) => ActionEnvelope::ok(MSG_NOTE_UPDATED),
            Err(err) => ActionEnvelope::fail(note_message(&err)),
        };
        to_json(&envelope)
    }

    /// Deletes a note by title.
    pub fn delete_note(&mut self, username: &str, title: &str) -> String {
        let envelope = match self.notes.delete_note(username, title) {
            Ok(()) => ActionEnvelope::ok(MSG_NOTE_DELETED),
            Err(err) => ActionEnvelope::fail(note_message(&err)),
        };
        to_json(&envelope)
    }

    /// Searches notes by keyword in title or content.
    ///
    /// Envelope: `{"success": true, "results": [note, ...]}` in creation
    /// order. An empty query matches every note.
    pub fn search_notes(&self, username: &str, query: &str) -> String {
        let results = self.notes.search_notes(username, query);
        to_json(&SearchEnvelope::with_results(results))
    }

    /// Sets a reminder date string on a note. Stored verbatim.
    pub fn set_reminder(&mut self, username: &str, title: &str, reminder_date: &str) -> String {
        let envelope = match self.notes.set_reminder(username, title, reminder_date) {
            Ok(()) => ActionEnvelope::ok(format!("Reminder set for {reminder_date}")),
            Err(err) => ActionEnvelope::fail(note_message(&err)),
        };
        to_json(&envelope)
    }

    /// Unions tags into a note's tag set. Duplicates are ignored.
    ///
    /// Envelope: `{"success": true, "tags": [..]}` with the resulting set.
    pub fn add_tags(&mut self, username: &str, title: &str, tags: Vec<String>) -> String {
        let envelope = match self.notes.add_tags(username, title, tags) {
            Ok(tags) => TagsEnvelope::updated(tags),
            Err(err) => TagsEnvelope::not_found(note_message(&err)),
        };
        to_json(&envelope)
    }

    /// Renders markdown content to HTML.
    ///
    /// Envelope: `{"success": true, "html": str}`.
    pub fn render_markdown(&self, content: &str) -> String {
        to_json(&MarkdownEnvelope::rendered(render_markdown(content)))
    }
}

fn account_message(err: &AccountServiceError) -> String {
    match err {
        AccountServiceError::DuplicateUser(_) => MSG_USER_EXISTS.to_string(),
        AccountServiceError::InvalidCredentials => MSG_LOGIN_FAIL.to_string(),
        AccountServiceError::Repo(inner) => inner.to_string(),
    }
}

fn note_message(err: &NoteServiceError) -> String {
    match err {
        NoteServiceError::DuplicateTitle(_) => MSG_TITLE_EXISTS.to_string(),
        NoteServiceError::NotFound(_) => MSG_NOTE_NOT_FOUND.to_string(),
        NoteServiceError::Repo(inner) => inner.to_string(),
    }
}

fn to_json<T: Serialize>(envelope: &T) -> String {
    serde_json::to_string(envelope).unwrap_or_else(|err| {
        error!("event=envelope_serialize module=api status=error detail={err}");
        r#"{"success":false,"message":"internal serialization error"}"#.to_string()
    })
}
