//! Gallery service.
//!
//! High-level operations behind the web handlers:
//! - Folder creation with the name rules and duplicate check
//! - Uploads writing both files, the row and the folder counter
//! - Per-folder listings for the browse API

use tracing::{info, warn};

use crate::db::Database;
use crate::{GalleryError, Result};

use super::file::{FileEntry, FileRepository, NewFileEntry};
use super::filename::{display_name, is_allowed_thumbnail, sanitize_filename};
use super::folder::{Folder, FolderRepository};
use super::storage::GalleryStorage;
use super::{MAX_FOLDER_NAME_LENGTH, MIN_FOLDER_NAME_LENGTH, THUMBNAIL_EXTENSIONS};

/// An upload as received from the client.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Target folder name.
    pub folder_name: String,
    /// Client filename of the content file.
    pub file_name: String,
    /// Content file bytes.
    pub file_content: Vec<u8>,
    /// Client filename of the thumbnail.
    pub thumbnail_name: String,
    /// Thumbnail bytes.
    pub thumbnail_content: Vec<u8>,
}

/// Result of an upload.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// The inserted row.
    pub file: FileEntry,
    /// Whether the target folder existed and had its counter incremented.
    pub folder_found: bool,
}

/// Files of one folder as three parallel lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderFiles {
    /// Stored content filenames.
    pub files: Vec<String>,
    /// Display names.
    pub clean_names: Vec<String>,
    /// Stored thumbnail filenames.
    pub thumbnails: Vec<String>,
}

impl FromIterator<FileEntry> for FolderFiles {
    fn from_iter<I: IntoIterator<Item = FileEntry>>(iter: I) -> Self {
        let mut out = FolderFiles::default();
        for entry in iter {
            out.files.push(entry.file_name);
            out.clean_names.push(entry.name_stripped);
            out.thumbnails.push(entry.thumbnail);
        }
        out
    }
}

/// Why `name` is not a usable folder name, or `None` if it is.
///
/// Length is counted in characters. The message is shown to the user as-is.
pub fn folder_name_error(name: &str) -> Option<String> {
    let len = name.chars().count();
    if len == 0 {
        return Some("Folder name is required.".to_string());
    }
    if !(MIN_FOLDER_NAME_LENGTH..=MAX_FOLDER_NAME_LENGTH).contains(&len) {
        return Some(format!(
            "Field must be between {MIN_FOLDER_NAME_LENGTH} and {MAX_FOLDER_NAME_LENGTH} characters long."
        ));
    }
    if name.chars().any(char::is_control) {
        return Some("Must not contain control characters.".to_string());
    }
    None
}

/// Check a folder name against the length and character rules.
pub(crate) fn validate_folder_name(name: &str) -> Result<()> {
    match folder_name_error(name) {
        Some(message) => Err(GalleryError::Validation(message)),
        None => Ok(()),
    }
}

/// Gallery service over a database and a storage.
pub struct GalleryService<'a> {
    db: &'a Database,
    storage: &'a GalleryStorage,
}

impl<'a> GalleryService<'a> {
    /// Create a new GalleryService.
    pub fn new(db: &'a Database, storage: &'a GalleryStorage) -> Self {
        Self { db, storage }
    }

    /// Create a folder.
    ///
    /// # Errors
    /// - `Validation` if the name is empty, outside 2–20 characters or
    ///   contains control characters
    /// - `Conflict` if a folder with that name already exists
    pub async fn create_folder(&self, name: &str) -> Result<Folder> {
        validate_folder_name(name)?;

        let repo = FolderRepository::new(self.db.pool());

        // The list check and the insert are separate statements; a racing
        // duplicate is caught by the primary key instead.
        let existing = repo.list_names().await?;
        if existing.iter().any(|n| n == name) {
            return Err(GalleryError::Conflict(format!("folder '{name}'")));
        }

        let folder = repo.create(name).await?;
        info!(folder = %folder.folder_name, "Folder created");
        Ok(folder)
    }

    /// List all folders in storage order.
    pub async fn list_folders(&self) -> Result<Vec<Folder>> {
        FolderRepository::new(self.db.pool()).list().await
    }

    /// Store an upload and record it.
    ///
    /// Both files are written first, then the row is inserted, then the
    /// folder counter is incremented. An unknown folder does not stop the
    /// upload: the row is kept and `folder_found` is `false`.
    ///
    /// # Errors
    /// - `Validation` if either file is missing, the thumbnail extension is
    ///   not allowed, or a name sanitizes to nothing
    pub async fn upload(&self, request: &UploadRequest) -> Result<UploadOutcome> {
        if request.file_name.is_empty() {
            return Err(GalleryError::Validation("file is required".to_string()));
        }
        if request.thumbnail_name.is_empty() {
            return Err(GalleryError::Validation(
                "thumbnail is required".to_string(),
            ));
        }

        let file_name = sanitize_filename(&request.file_name);
        if file_name.is_empty() {
            return Err(GalleryError::Validation(format!(
                "invalid file name: {:?}",
                request.file_name
            )));
        }

        // The extension is checked on the submitted name; sanitizing may
        // drop a non-ASCII stem together with its dot.
        if !is_allowed_thumbnail(&request.thumbnail_name) {
            return Err(GalleryError::Validation(format!(
                "thumbnail must be one of: {}",
                THUMBNAIL_EXTENSIONS.join(", ")
            )));
        }
        let thumbnail = sanitize_filename(&request.thumbnail_name);
        if thumbnail.is_empty() {
            return Err(GalleryError::Validation(format!(
                "invalid thumbnail name: {:?}",
                request.thumbnail_name
            )));
        }

        let clean_name = display_name(&file_name);

        self.storage
            .save_file(&file_name, &request.file_content)
            .await?;
        self.storage
            .save_thumbnail(&thumbnail, &request.thumbnail_content)
            .await?;

        let new_file = NewFileEntry::new(&file_name, clean_name, &thumbnail, &request.folder_name);
        let file = FileRepository::new(self.db.pool()).create(&new_file).await?;

        let folder_found = FolderRepository::new(self.db.pool())
            .increment_elements(&request.folder_name)
            .await?;

        if folder_found {
            info!(
                folder = %file.folder_name,
                file = %file.file_name,
                "File uploaded"
            );
        } else {
            warn!(
                folder = %file.folder_name,
                file = %file.file_name,
                "File uploaded into unknown folder; counter not updated"
            );
        }

        Ok(UploadOutcome { file, folder_found })
    }

    /// Files of a folder, or `None` if the folder does not exist.
    pub async fn get_files(&self, folder_name: &str) -> Result<Option<FolderFiles>> {
        let folder = FolderRepository::new(self.db.pool())
            .get_by_name(folder_name)
            .await?;

        if folder.is_none() {
            return Ok(None);
        }

        let files = FileRepository::new(self.db.pool())
            .list_by_folder(folder_name)
            .await?;

        Ok(Some(files.into_iter().collect()))
    }
}
