//! Folders, files and uploads.
//!
//! This module provides:
//! - Folder and file repositories over the `folders` / `files` tables
//! - Filename sanitizing and display-name derivation
//! - Storage of content files and thumbnails in two directories
//! - The service tying uploads, rows and the folder counter together

mod file;
mod filename;
mod folder;
mod service;
mod storage;

pub use file::{FileEntry, FileRepository, NewFileEntry};
pub use filename::{display_name, is_allowed_thumbnail, sanitize_filename};
pub use folder::{Folder, FolderRepository};
pub use service::{folder_name_error, FolderFiles, GalleryService, UploadOutcome, UploadRequest};
pub use storage::GalleryStorage;

/// Minimum folder name length (in characters).
pub const MIN_FOLDER_NAME_LENGTH: usize = 2;

/// Maximum folder name length (in characters).
pub const MAX_FOLDER_NAME_LENGTH: usize = 20;

/// Maximum length of a stored filename (in characters).
pub const MAX_FILENAME_LENGTH: usize = 60;

/// Extensions accepted for thumbnails. Matching is case-sensitive.
pub const THUMBNAIL_EXTENSIONS: &[&str] = &["jpg", "png", "jpeg"];
