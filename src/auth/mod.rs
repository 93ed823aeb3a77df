//! Authentication for the single admin account.
//!
//! This module provides password hashing, credential checks against the
//! configured admin, and signed session tokens.

mod password;
mod session;

pub use password::{hash_password, verify_password, PasswordError};
pub use session::{SessionClaims, SessionError, SessionManager};

use tracing::warn;

use crate::config::AuthConfig;

/// Checks login attempts against the configured admin credentials.
#[derive(Clone)]
pub struct CredentialChecker {
    username: String,
    password_hash: String,
}

impl CredentialChecker {
    /// Create a checker for one username and password hash.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Create a checker from the `[auth]` configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.username, &config.password_hash)
    }

    /// The admin username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Whether `username` and `password` match the admin account.
    ///
    /// This runs the password hash and is CPU bound.
    pub fn check(&self, username: &str, password: &str) -> bool {
        if username != self.username {
            return false;
        }

        match verify_password(password, &self.password_hash) {
            Ok(()) => true,
            Err(PasswordError::VerificationFailed) => false,
            Err(e) => {
                warn!("Configured admin password hash is unusable: {}", e);
                false
            }
        }
    }
}

impl std::fmt::Debug for CredentialChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialChecker")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
