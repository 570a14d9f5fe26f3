//! Account domain model.
//!
//! # Responsibility
//! - Define the registered-user record held by the account directory.
//!
//! # Invariants
//! - `username` is the unique key; an account is never mutated after
//!   registration.
//! - Passwords are stored and compared as plain strings. This is a
//!   deliberate scope limit of the account directory, not an oversight
//!   in the comparison code.

use serde::{Deserialize, Serialize};

/// Registered user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique login name. Acts as the correlation key for note ownership.
    pub username: String,
    /// Plaintext password, checked by exact string equality.
    pub password: String,
}

impl Account {
    /// Creates an account record from registration input.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns whether the supplied password matches the stored one.
    ///
    /// Exact equality, no normalization. Callers must not reveal whether
    /// the username or the password was the mismatching half.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
