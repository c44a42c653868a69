//! Credential store: accounts come from the `users` section of the config
//! file, with a built-in two-account fallback for unconfigured installs.

use std::collections::BTreeMap;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::account::{Role, UserAccount};
use crate::ui::messages::warning;

/// Password check seam. The default is a plaintext comparison; a deployment
/// can swap in a hashed scheme without touching call sites.
pub trait CredentialVerifier {
    fn verify(&self, account: &UserAccount, password: &str) -> bool;
}

/// Exact, case-sensitive plaintext comparison. No hashing, no lockout,
/// no rate limiting. NOT suitable for production credentials.
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn verify(&self, account: &UserAccount, password: &str) -> bool {
        account.password == password
    }
}

/// Load username -> account from configuration. Never fails: a missing or
/// unreadable `users` section yields the built-in fallback accounts
/// (admin/admin, viewer/viewer) so a fresh install stays usable.
/// The fallback is flagged on stdout because it is unsafe anywhere real.
pub fn load_accounts(cfg: &Config) -> BTreeMap<String, UserAccount> {
    let mut accounts: BTreeMap<String, UserAccount> = cfg
        .users
        .iter()
        .map(|(username, entry)| {
            (
                username.clone(),
                UserAccount {
                    username: username.clone(),
                    password: entry.password.clone(),
                    role: entry.role.clone(),
                },
            )
        })
        .collect();

    if accounts.is_empty() {
        warning("No users configured; using built-in test accounts (admin/admin, viewer/viewer). Do not use in production.");
        accounts = fallback_accounts();
    }

    accounts
}

fn fallback_accounts() -> BTreeMap<String, UserAccount> {
    let mut map = BTreeMap::new();
    map.insert(
        "admin".to_string(),
        UserAccount {
            username: "admin".to_string(),
            password: "admin".to_string(),
            role: Role::Admin,
        },
    );
    map.insert(
        "viewer".to_string(),
        UserAccount {
            username: "viewer".to_string(),
            password: "viewer".to_string(),
            role: Role::Viewer,
        },
    );
    map
}

/// Check a username/password pair against the loaded accounts.
/// Unknown username and wrong password both map to the same `AuthFailure`.
pub fn authenticate(
    accounts: &BTreeMap<String, UserAccount>,
    verifier: &dyn CredentialVerifier,
    username: &str,
    password: &str,
) -> AppResult<UserAccount> {
    match accounts.get(username) {
        Some(account) if verifier.verify(account, password) => Ok(account.clone()),
        _ => Err(AppError::AuthFailure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accounts() -> BTreeMap<String, UserAccount> {
        fallback_accounts()
    }

    #[test]
    fn authenticate_accepts_exact_match() {
        let acc = authenticate(&accounts(), &PlaintextVerifier, "admin", "admin").unwrap();
        assert_eq!(acc.role, Role::Admin);
    }

    #[test]
    fn authenticate_is_case_sensitive() {
        assert!(matches!(
            authenticate(&accounts(), &PlaintextVerifier, "admin", "Admin"),
            Err(AppError::AuthFailure)
        ));
    }

    #[test]
    fn authenticate_rejects_unknown_user() {
        assert!(matches!(
            authenticate(&accounts(), &PlaintextVerifier, "ghost", "x"),
            Err(AppError::AuthFailure)
        ));
    }

    #[test]
    fn empty_config_falls_back_to_test_accounts() {
        let cfg = Config::default();
        let accounts = load_accounts(&cfg);
        assert_eq!(accounts.len(), 2);
        assert!(accounts.contains_key("admin"));
        assert!(accounts.contains_key("viewer"));
    }
}
