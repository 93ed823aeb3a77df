//! Gallery - a small self-hosted file gallery.
//!
//! An administrator creates folders and uploads files with thumbnails;
//! everyone else browses the folders without logging in.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod web;

pub use auth::{
    hash_password, verify_password, CredentialChecker, PasswordError, SessionClaims,
    SessionError, SessionManager,
};
pub use config::Config;
pub use db::Database;
pub use error::{GalleryError, Result};
pub use gallery::{
    display_name, is_allowed_thumbnail, sanitize_filename, FileEntry, FileRepository, Folder,
    FolderFiles, FolderRepository, GalleryService, GalleryStorage, NewFileEntry, UploadOutcome,
    UploadRequest,
};
