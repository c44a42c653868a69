pub mod accounts;
pub mod policy;
pub mod session;

pub use accounts::{authenticate, load_accounts, CredentialVerifier, PlaintextVerifier};
pub use session::Session;
