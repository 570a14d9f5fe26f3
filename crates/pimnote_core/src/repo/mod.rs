//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate map/ordering bookkeeping from service orchestration.
//!
//! # Invariants
//! - Repositories own all shared state; there are no process globals.
//! - Repository APIs return semantic errors (`DuplicateUser`,
//!   `DuplicateTitle`) instead of silently overwriting.

pub mod account_repo;
pub mod note_repo;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by the account and note stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Registration hit an existing username.
    DuplicateUser(String),
    /// Note creation hit an existing title for that user.
    DuplicateTitle(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateUser(username) => write!(f, "user already exists: `{username}`"),
            Self::DuplicateTitle(title) => write!(f, "note title already exists: `{title}`"),
        }
    }
}

impl Error for RepoError {}
