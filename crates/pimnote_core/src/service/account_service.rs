//! Account directory use-case service.
//!
//! # Responsibility
//! - Provide register/authenticate/logout APIs over account storage.
//!
//! # Invariants
//! - Authentication failure is a single indistinguishable error:
//!   callers cannot tell a missing username from a wrong password.
//! - Logout always succeeds; there is no session state to invalidate.

use crate::model::account::Account;
use crate::repo::account_repo::AccountRepository;
use crate::repo::RepoError;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for account use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountServiceError {
    /// Username is already registered.
    DuplicateUser(String),
    /// Unknown username or wrong password, deliberately merged.
    InvalidCredentials,
    /// Storage-layer failure outside the account taxonomy.
    Repo(RepoError),
}

impl Display for AccountServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateUser(username) => write!(f, "user already exists: `{username}`"),
            Self::InvalidCredentials => write!(f, "invalid username or password"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AccountServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for AccountServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateUser(username) => Self::DuplicateUser(username),
            other => Self::Repo(other),
        }
    }
}

/// Account directory facade over repository implementations.
pub struct AccountService<R: AccountRepository> {
    repo: R,
}

impl<R: AccountRepository> AccountService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new account.
    ///
    /// # Contract
    /// - Rejects an already-registered username; the first password wins.
    /// - Stores the password as supplied. No hashing at this scope.
    pub fn register(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<(), AccountServiceError> {
        let account = Account::new(username, password);
        let username = account.username.clone();
        self.repo.insert_account(account)?;
        info!("event=user_registered module=account status=ok user={username}");
        Ok(())
    }

    /// Checks credentials against the stored account.
    ///
    /// # Contract
    /// - Succeeds iff the account exists and passwords are equal.
    /// - Failure reason is never disclosed beyond `InvalidCredentials`.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(), AccountServiceError> {
        match self.repo.get_account(username) {
            Some(account) if account.password_matches(password) => {
                debug!("event=login module=account status=ok user={username}");
                Ok(())
            }
            _ => {
                warn!("event=login module=account status=rejected user={username}");
                Err(AccountServiceError::InvalidCredentials)
            }
        }
    }

    /// Acknowledges a logout.
    ///
    /// There is no session concept, so this is a stateless acknowledgement
    /// kept for interface symmetry with the envelope surface.
    pub fn logout(&self, username: &str) {
        debug!("event=logout module=account status=ok user={username}");
    }
}
