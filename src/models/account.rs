use serde::{Deserialize, Serialize};

/// Account role. Anything outside the two built-in roles is carried through
/// verbatim so deployments can define their own labels; only `Admin` carries
/// elevated rights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Viewer,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Viewer => "viewer",
            Role::Other(s) => s.as_str(),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "admin" => Role::Admin,
            "viewer" => Role::Viewer,
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(r: Role) -> Self {
        r.as_str().to_string()
    }
}

/// One configured login. Loaded once at startup, never mutated at runtime.
/// The password is compared in plaintext (see `auth::accounts`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub username: String,
    pub password: String,
    pub role: Role,
}
