use pimnote_core::{AccountService, AccountServiceError, MemoryAccountRepository};

fn service() -> AccountService<MemoryAccountRepository> {
    AccountService::new(MemoryAccountRepository::new())
}

#[test]
fn authenticate_succeeds_only_after_matching_registration() {
    let mut accounts = service();

    accounts.authenticate("demo", "pimpass").unwrap_err();

    accounts.register("demo", "pimpass").unwrap();
    accounts.authenticate("demo", "pimpass").unwrap();
    accounts.authenticate("demo", "other").unwrap_err();
}

#[test]
fn second_registration_fails_and_retains_first_password() {
    let mut accounts = service();
    accounts.register("demo", "original").unwrap();

    let err = accounts.register("demo", "replacement").unwrap_err();
    assert_eq!(err, AccountServiceError::DuplicateUser("demo".to_string()));

    accounts.authenticate("demo", "original").unwrap();
    let rejected = accounts.authenticate("demo", "replacement").unwrap_err();
    assert_eq!(rejected, AccountServiceError::InvalidCredentials);
}

#[test]
fn credentials_failure_never_discloses_which_half_was_wrong() {
    let mut accounts = service();
    accounts.register("demo", "pimpass").unwrap();

    let bad_password = accounts.authenticate("demo", "wrong").unwrap_err();
    let bad_username = accounts.authenticate("wrong", "pimpass").unwrap_err();
    assert_eq!(bad_password, bad_username);
}

#[test]
fn logout_is_a_stateless_acknowledgement() {
    let mut accounts = service();
    accounts.register("demo", "pimpass").unwrap();

    // No session exists, so logout changes nothing observable.
    accounts.logout("demo");
    accounts.authenticate("demo", "pimpass").unwrap();
    accounts.logout("never-registered");
}
