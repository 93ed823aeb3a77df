//! Folder type and repository.

use sqlx::SqlitePool;

use crate::{GalleryError, Result};

/// A named folder grouping uploaded files.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Folder {
    /// Folder name (primary key).
    pub folder_name: String,
    /// Number of files attached through uploads.
    pub elements: i64,
    /// When the folder was created (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub created_at: String,
}

/// Repository for folder operations.
pub struct FolderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FolderRepository<'a> {
    /// Create a new FolderRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new folder.
    ///
    /// A primary key violation is reported as [`GalleryError::Conflict`].
    pub async fn create(&self, folder_name: &str) -> Result<Folder> {
        let result = sqlx::query("INSERT INTO folders (folder_name) VALUES (?)")
            .bind(folder_name)
            .execute(self.pool)
            .await;

        match result {
            Ok(_) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(GalleryError::Conflict(format!("folder '{folder_name}'")));
            }
            Err(e) => return Err(e.into()),
        }

        self.get_by_name(folder_name)
            .await?
            .ok_or_else(|| GalleryError::NotFound("folder".to_string()))
    }

    /// Get a folder by name.
    pub async fn get_by_name(&self, folder_name: &str) -> Result<Option<Folder>> {
        let folder = sqlx::query_as::<_, Folder>(
            "SELECT folder_name, elements, created_at FROM folders WHERE folder_name = ?",
        )
        .bind(folder_name)
        .fetch_optional(self.pool)
        .await?;

        Ok(folder)
    }

    /// List all folders in storage order.
    pub async fn list(&self) -> Result<Vec<Folder>> {
        let folders = sqlx::query_as::<_, Folder>(
            "SELECT folder_name, elements, created_at FROM folders ORDER BY rowid",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(folders)
    }

    /// List the names of all folders in storage order.
    pub async fn list_names(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar("SELECT folder_name FROM folders ORDER BY rowid")
            .fetch_all(self.pool)
            .await?;

        Ok(names)
    }

    /// Add one to a folder's element counter.
    ///
    /// Returns `false` if no folder has that name.
    pub async fn increment_elements(&self, folder_name: &str) -> Result<bool> {
        let result =
            sqlx::query("UPDATE folders SET elements = elements + 1 WHERE folder_name = ?")
                .bind(folder_name)
                .execute(self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count all folders.
    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM folders")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
