use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::errors::AppResult;
use crate::models::account::UserAccount;

use super::accounts::{authenticate, CredentialVerifier};

/// The authenticated identity for one invocation. Created at login, passed
/// explicitly into every gated core call, dropped when the command finishes.
/// Never stored globally.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: UserAccount,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn login(
        accounts: &BTreeMap<String, UserAccount>,
        verifier: &dyn CredentialVerifier,
        username: &str,
        password: &str,
    ) -> AppResult<Self> {
        let user = authenticate(accounts, verifier, username, password)?;
        Ok(Self {
            user,
            started_at: Utc::now(),
        })
    }

    pub fn username(&self) -> &str {
        &self.user.username
    }

    pub fn is_admin(&self) -> bool {
        self.user.role.is_admin()
    }
}
