//! Account repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide present-or-absent storage for registered accounts.
//!
//! # Invariants
//! - `insert_account` never overwrites: the first registered password for
//!   a username is retained.
//! - Lookup by a never-registered username is `None`, not an error.

use crate::model::account::Account;
use crate::repo::{RepoError, RepoResult};
use std::collections::HashMap;

/// Repository interface for the account directory.
pub trait AccountRepository {
    /// Stores a new account, rejecting duplicates by username.
    fn insert_account(&mut self, account: Account) -> RepoResult<()>;
    /// Looks up one account by username.
    fn get_account(&self, username: &str) -> Option<&Account>;
}

/// Process-local account store backed by a username map.
#[derive(Debug, Default)]
pub struct MemoryAccountRepository {
    accounts: HashMap<String, Account>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountRepository for MemoryAccountRepository {
    fn insert_account(&mut self, account: Account) -> RepoResult<()> {
        if self.accounts.contains_key(&account.username) {
            return Err(RepoError::DuplicateUser(account.username));
        }
        self.accounts.insert(account.username.clone(), account);
        Ok(())
    }

    fn get_account(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }
}
