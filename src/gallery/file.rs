//! File entries and their repository.

use sqlx::SqlitePool;

use crate::{GalleryError, Result};

/// Metadata row for an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct FileEntry {
    /// Row ID.
    pub id: i64,
    /// Sanitized content filename (key in the files directory).
    pub file_name: String,
    /// Display name derived from `file_name`.
    pub name_stripped: String,
    /// Sanitized thumbnail filename (key in the thumbnails directory).
    pub thumbnail: String,
    /// Name of the folder the file was uploaded into.
    pub folder_name: String,
    /// When the file was uploaded (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub created_at: String,
}

/// Data for inserting a file row.
#[derive(Debug, Clone)]
pub struct NewFileEntry {
    /// Sanitized content filename.
    pub file_name: String,
    /// Display name.
    pub name_stripped: String,
    /// Sanitized thumbnail filename.
    pub thumbnail: String,
    /// Target folder name.
    pub folder_name: String,
}

impl NewFileEntry {
    /// Create a new NewFileEntry.
    pub fn new(
        file_name: impl Into<String>,
        name_stripped: impl Into<String>,
        thumbnail: impl Into<String>,
        folder_name: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            name_stripped: name_stripped.into(),
            thumbnail: thumbnail.into(),
            folder_name: folder_name.into(),
        }
    }
}

/// Repository for file rows.
pub struct FileRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FileRepository<'a> {
    /// Create a new FileRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a file row.
    ///
    /// The folder is not checked; see [`crate::GalleryService::upload`].
    pub async fn create(&self, file: &NewFileEntry) -> Result<FileEntry> {
        let result = sqlx::query(
            "INSERT INTO files (file_name, name_stripped, thumbnail, folder_name)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&file.file_name)
        .bind(&file.name_stripped)
        .bind(&file.thumbnail)
        .bind(&file.folder_name)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| GalleryError::NotFound("file".to_string()))
    }

    /// Get a file row by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<FileEntry>> {
        let file = sqlx::query_as::<_, FileEntry>(
            "SELECT id, file_name, name_stripped, thumbnail, folder_name, created_at
             FROM files WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(file)
    }

    /// List the files of a folder in upload order.
    pub async fn list_by_folder(&self, folder_name: &str) -> Result<Vec<FileEntry>> {
        let files = sqlx::query_as::<_, FileEntry>(
            "SELECT id, file_name, name_stripped, thumbnail, folder_name, created_at
             FROM files WHERE folder_name = ? ORDER BY id",
        )
        .bind(folder_name)
        .fetch_all(self.pool)
        .await?;

        Ok(files)
    }

    /// Count the file rows referencing a folder.
    pub async fn count_by_folder(&self, folder_name: &str) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM files WHERE folder_name = ?")
            .bind(folder_name)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
