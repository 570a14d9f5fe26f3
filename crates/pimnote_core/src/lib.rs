//! Core domain logic for PimNote.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod markdown;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use markdown::render_markdown;
pub use model::account::Account;
pub use model::note::{Note, PREVIEW_MAX_CHARS};
pub use repo::account_repo::{AccountRepository, MemoryAccountRepository};
pub use repo::note_repo::{MemoryNoteRepository, NoteRepository};
pub use repo::{RepoError, RepoResult};
pub use search::{search_notes, SearchQuery};
pub use service::account_service::{AccountService, AccountServiceError};
pub use service::note_service::{NotePreview, NoteService, NoteServiceError, NoteView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
