//! Handlers for the web interface.

pub mod auth;
pub mod gallery;

pub use auth::*;
pub use gallery::*;

use crate::auth::{CredentialChecker, SessionManager};
use crate::config::Config;
use crate::db::Database;
use crate::gallery::{GalleryService, GalleryStorage};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database pool.
    pub db: Database,
    /// Upload directories.
    pub storage: GalleryStorage,
    /// Admin credentials.
    pub credentials: CredentialChecker,
    /// Session token issuer and verifier.
    pub sessions: SessionManager,
    /// Whether the session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        db: Database,
        storage: GalleryStorage,
        credentials: CredentialChecker,
        sessions: SessionManager,
    ) -> Self {
        Self {
            db,
            storage,
            credentials,
            sessions,
            cookie_secure: true,
        }
    }

    /// Create the state from the loaded configuration.
    pub fn from_config(config: &Config, db: Database, storage: GalleryStorage) -> Self {
        Self::new(
            db,
            storage,
            CredentialChecker::from_config(&config.auth),
            SessionManager::new(&config.auth.session_secret, config.auth.session_expiry_secs),
        )
        .with_cookie_secure(config.auth.cookie_secure)
    }

    /// Set the `Secure` attribute of the session cookie.
    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    /// Gallery service over this state's database and storage.
    pub fn gallery(&self) -> GalleryService<'_> {
        GalleryService::new(&self.db, &self.storage)
    }
}
