//! Response DTOs for the browse API.

use serde::Serialize;

use crate::gallery::FolderFiles;

/// Files of a folder as three parallel lists.
#[derive(Debug, Serialize)]
pub struct FolderFilesResponse {
    /// Stored content filenames (served under `/Files/`).
    pub files: Vec<String>,
    /// Display names.
    pub clean_name: Vec<String>,
    /// Stored thumbnail filenames (served under `/thumbnails/`).
    pub thumbnail: Vec<String>,
}

impl From<FolderFiles> for FolderFilesResponse {
    fn from(files: FolderFiles) -> Self {
        Self {
            files: files.files,
            clean_name: files.clean_names,
            thumbnail: files.thumbnails,
        }
    }
}

/// Body returned for an unknown folder.
#[derive(Debug, Default, Serialize)]
pub struct MissingFolderResponse {
    /// Always empty.
    pub files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_files_shape() {
        let files = FolderFiles {
            files: vec!["a.pdf".to_string()],
            clean_names: vec!["a".to_string()],
            thumbnails: vec!["a.png".to_string()],
        };

        let json = serde_json::to_value(FolderFilesResponse::from(files)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "files": ["a.pdf"],
                "clean_name": ["a"],
                "thumbnail": ["a.png"]
            })
        );
    }

    #[test]
    fn test_missing_folder_shape() {
        let json = serde_json::to_value(MissingFolderResponse::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "files": [] }));
    }
}
