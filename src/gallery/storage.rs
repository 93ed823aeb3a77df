//! On-disk storage for uploaded files and thumbnails.
//!
//! Two flat directories, keyed by sanitized filename:
//! ```text
//! {files_dir}/
//! ├── holiday_video.mp4
//! └── report.pdf
//! {thumbnails_dir}/
//! ├── holiday.jpg
//! └── report_cover.png
//! ```
//! Writing an existing key replaces the earlier file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{GalleryError, Result};

/// Storage for content files and thumbnails.
#[derive(Debug, Clone)]
pub struct GalleryStorage {
    files_dir: PathBuf,
    thumbnails_dir: PathBuf,
}

impl GalleryStorage {
    /// Create a storage over the two directories, creating them if needed.
    pub fn new(files_dir: impl Into<PathBuf>, thumbnails_dir: impl Into<PathBuf>) -> Result<Self> {
        let files_dir = files_dir.into();
        let thumbnails_dir = thumbnails_dir.into();
        fs::create_dir_all(&files_dir)?;
        fs::create_dir_all(&thumbnails_dir)?;

        Ok(Self {
            files_dir,
            thumbnails_dir,
        })
    }

    /// Directory holding content files.
    pub fn files_dir(&self) -> &Path {
        &self.files_dir
    }

    /// Directory holding thumbnails.
    pub fn thumbnails_dir(&self) -> &Path {
        &self.thumbnails_dir
    }

    /// Write a content file under `name`.
    pub async fn save_file(&self, name: &str, content: &[u8]) -> Result<PathBuf> {
        Self::write(&self.files_dir, name, content).await
    }

    /// Write a thumbnail under `name`.
    pub async fn save_thumbnail(&self, name: &str, content: &[u8]) -> Result<PathBuf> {
        Self::write(&self.thumbnails_dir, name, content).await
    }

    /// Full path of a content file.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.files_dir.join(name)
    }

    /// Full path of a thumbnail.
    pub fn thumbnail_path(&self, name: &str) -> PathBuf {
        self.thumbnails_dir.join(name)
    }

    async fn write(dir: &Path, name: &str, content: &[u8]) -> Result<PathBuf> {
        if !is_flat_key(name) {
            return Err(GalleryError::Validation(format!(
                "invalid storage key: {name:?}"
            )));
        }

        let path = dir.join(name);
        tokio::fs::write(&path, content).await?;
        Ok(path)
    }
}

/// A key must name a single entry directly inside the storage directory.
fn is_flat_key(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}
