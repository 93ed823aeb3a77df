//! Configuration module for the gallery.

use serde::Deserialize;
use std::path::Path;

use crate::{GalleryError, Result};

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/gallery.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Upload storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding uploaded content files.
    #[serde(default = "default_files_dir")]
    pub files_dir: String,
    /// Directory holding uploaded thumbnails.
    #[serde(default = "default_thumbnails_dir")]
    pub thumbnails_dir: String,
    /// Maximum request body size in megabytes (0 = unlimited).
    #[serde(default)]
    pub max_upload_size_mb: u64,
}

fn default_files_dir() -> String {
    "files".to_string()
}

fn default_thumbnails_dir() -> String {
    "thumbnails".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            files_dir: default_files_dir(),
            thumbnails_dir: default_thumbnails_dir(),
            max_upload_size_mb: 0,
        }
    }
}

/// Admin account and session configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Admin username.
    #[serde(default)]
    pub username: String,
    /// Admin password hash (argon2 PHC string or bcrypt).
    #[serde(default)]
    pub password_hash: String,
    /// Secret used to sign session tokens.
    #[serde(default)]
    pub session_secret: String,
    /// Session lifetime in seconds.
    #[serde(default = "default_session_expiry")]
    pub session_expiry_secs: u64,
    /// Mark the session cookie as Secure (HTTPS only).
    #[serde(default = "default_cookie_secure")]
    pub cookie_secure: bool,
}

fn default_session_expiry() -> u64 {
    86400 // 1 day
}

fn default_cookie_secure() -> bool {
    true
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password_hash: String::new(),
            session_secret: String::new(),
            session_expiry_secs: default_session_expiry(),
            cookie_secure: default_cookie_secure(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/gallery.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Upload storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Admin account and session configuration.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(GalleryError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| GalleryError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `GALLERY_ADMIN_USERNAME`
    /// - `GALLERY_ADMIN_PASSWORD_HASH`
    /// - `GALLERY_SESSION_SECRET`
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides(&mut self) {
        let overrides = [
            ("GALLERY_ADMIN_USERNAME", &mut self.auth.username),
            ("GALLERY_ADMIN_PASSWORD_HASH", &mut self.auth.password_hash),
            ("GALLERY_SESSION_SECRET", &mut self.auth.session_secret),
        ];

        for (var, target) in overrides {
            if let Ok(value) = std::env::var(var) {
                if !value.is_empty() {
                    *target = value;
                }
            }
        }
    }

    /// Validate the configuration.
    ///
    /// The admin username, password hash and session secret must all be set.
    pub fn validate(&self) -> Result<()> {
        if self.auth.username.is_empty() {
            return Err(GalleryError::Config(
                "auth.username is not set (config.toml or GALLERY_ADMIN_USERNAME)".to_string(),
            ));
        }
        if self.auth.password_hash.is_empty() {
            return Err(GalleryError::Config(
                "auth.password_hash is not set (config.toml or GALLERY_ADMIN_PASSWORD_HASH)"
                    .to_string(),
            ));
        }
        if self.auth.session_secret.is_empty() {
            return Err(GalleryError::Config(
                "auth.session_secret is not set (config.toml or GALLERY_SESSION_SECRET)"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Maximum request body size in bytes, `None` when unlimited.
    pub fn max_upload_bytes(&self) -> Option<usize> {
        match self.storage.max_upload_size_mb {
            0 => None,
            mb => Some((mb as usize).saturating_mul(1024 * 1024)),
        }
    }
}
