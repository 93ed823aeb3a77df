//! Request DTOs for the web forms.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::gallery::folder_name_error;

/// Login form.
///
/// Missing fields deserialize as empty strings so a malformed post is
/// treated like a failed login.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    /// Username.
    #[serde(default)]
    pub username: String,
    /// Password.
    #[serde(default)]
    pub password: String,
}

/// Folder creation form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FolderForm {
    /// Folder name.
    #[validate(custom(function = "folder_name_rules"))]
    pub name: String,
}

/// An uploaded file part.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Client filename.
    pub filename: String,
    /// File content.
    pub content: Vec<u8>,
}

/// File upload form.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    /// Content file.
    pub file: Option<FilePart>,
    /// Thumbnail image.
    pub thumbnail: Option<FilePart>,
    /// Target folder.
    pub folder_name: String,
}

/// A submission to the management page: one of its two forms.
#[derive(Debug, Clone)]
pub enum ManageSubmission {
    /// The folder form (has a `name` field).
    Folder(FolderForm),
    /// The upload form.
    Upload(UploadForm),
}

impl ManageSubmission {
    /// Build a submission from plain text fields (no files attached).
    pub fn from_text_fields(mut fields: HashMap<String, String>) -> Self {
        match fields.remove("name") {
            Some(name) => ManageSubmission::Folder(FolderForm { name }),
            None => ManageSubmission::Upload(UploadForm {
                folder_name: fields.remove("folder_name").unwrap_or_default(),
                ..Default::default()
            }),
        }
    }
}

/// Apply the gallery's folder name rules.
pub fn folder_name_rules(value: &str) -> Result<(), validator::ValidationError> {
    match folder_name_error(value) {
        Some(message) => {
            let mut error = validator::ValidationError::new("folder_name");
            error.message = Some(Cow::Owned(message));
            Err(error)
        }
        None => Ok(()),
    }
}

/// Flatten validation errors into display messages.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {field}."));
            messages.push(message);
        }
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_form_valid() {
        let form = FolderForm {
            name: "Holidays".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_folder_form_required() {
        let form = FolderForm::default();
        let errors = form.validate().unwrap_err();
        assert_eq!(validation_messages(&errors), vec!["Folder name is required."]);
    }

    #[test]
    fn test_folder_form_length() {
        for name in ["a", &"x".repeat(21)] {
            let form = FolderForm {
                name: name.to_string(),
            };
            let errors = form.validate().unwrap_err();
            assert_eq!(
                validation_messages(&errors),
                vec!["Field must be between 2 and 20 characters long."]
            );
        }
    }

    #[test]
    fn test_folder_form_counts_characters() {
        // 20 characters, 60 bytes
        let form = FolderForm {
            name: "写".repeat(20),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_folder_form_control_chars() {
        let form = FolderForm {
            name: "bad\tname".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            validation_messages(&errors),
            vec!["Must not contain control characters."]
        );
    }

    #[test]
    fn test_submission_from_text_fields() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "Docs".to_string());
        assert!(matches!(
            ManageSubmission::from_text_fields(fields),
            ManageSubmission::Folder(FolderForm { name }) if name == "Docs"
        ));

        let mut fields = HashMap::new();
        fields.insert("folder_name".to_string(), "Docs".to_string());
        match ManageSubmission::from_text_fields(fields) {
            ManageSubmission::Upload(form) => {
                assert_eq!(form.folder_name, "Docs");
                assert!(form.file.is_none());
                assert!(form.thumbnail.is_none());
            }
            other => panic!("expected upload form, got {other:?}"),
        }
    }
}
