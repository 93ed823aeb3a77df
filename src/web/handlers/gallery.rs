//! Gallery pages and browse API handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{FromRequest, Multipart, Path, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use validator::Validate;

use crate::gallery::UploadRequest;
use crate::web::dto::{
    validation_messages, FilePart, FolderFilesResponse, FolderForm, ManageSubmission,
    MissingFolderResponse, UploadForm,
};
use crate::web::error::ApiError;
use crate::web::middleware::AdminSession;
use crate::web::pages::{HomePage, ManagePage};
use crate::GalleryError;

use super::AppState;

/// GET /Home - Public folder listing.
pub async fn home(State(state): State<Arc<AppState>>) -> Result<HomePage, ApiError> {
    let folders = state.gallery().list_folders().await?;
    Ok(HomePage { folders })
}

/// GET /Upload - Management page.
pub async fn manage_page(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
) -> Result<ManagePage, ApiError> {
    let folders = state.gallery().list_folders().await?;
    Ok(ManagePage::new(folders))
}

/// POST /Upload - Folder creation or file upload.
///
/// Success redirects back to the management page. Validation failures
/// re-render it with the errors next to the submitted form.
pub async fn manage_submit(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    submission: ManageSubmission,
) -> Result<Response, ApiError> {
    match submission {
        ManageSubmission::Folder(form) => create_folder(&state, form).await,
        ManageSubmission::Upload(form) => upload_file(&state, form).await,
    }
}

async fn create_folder(state: &AppState, form: FolderForm) -> Result<Response, ApiError> {
    if let Err(errors) = form.validate() {
        return folder_form_error(state, form.name, validation_messages(&errors)).await;
    }

    match state.gallery().create_folder(&form.name).await {
        Ok(_) => Ok(Redirect::to("/Upload").into_response()),
        Err(GalleryError::Conflict(_)) => {
            let message = "A folder with this name already exists.".to_string();
            folder_form_error(state, form.name, vec![message]).await
        }
        Err(GalleryError::Validation(message)) => {
            folder_form_error(state, form.name, vec![message]).await
        }
        Err(e) => Err(e.into()),
    }
}

async fn upload_file(state: &AppState, form: UploadForm) -> Result<Response, ApiError> {
    let mut errors = Vec::new();
    if form.file.is_none() {
        errors.push("File is required.".to_string());
    }
    if form.thumbnail.is_none() {
        errors.push("Thumbnail is required.".to_string());
    }
    if form.folder_name.is_empty() {
        errors.push("Folder is required.".to_string());
    }

    let (Some(file), Some(thumbnail)) = (form.file, form.thumbnail) else {
        return upload_form_error(state, errors).await;
    };
    if !errors.is_empty() {
        return upload_form_error(state, errors).await;
    }

    let request = UploadRequest {
        folder_name: form.folder_name,
        file_name: file.filename,
        file_content: file.content,
        thumbnail_name: thumbnail.filename,
        thumbnail_content: thumbnail.content,
    };

    match state.gallery().upload(&request).await {
        Ok(_) => Ok(Redirect::to("/Upload").into_response()),
        Err(GalleryError::Validation(message)) => upload_form_error(state, vec![message]).await,
        Err(e) => Err(e.into()),
    }
}

async fn folder_form_error(
    state: &AppState,
    input: String,
    errors: Vec<String>,
) -> Result<Response, ApiError> {
    let folders = state.gallery().list_folders().await?;
    Ok(ManagePage::new(folders)
        .with_folder_errors(input, errors)
        .into_response())
}

async fn upload_form_error(state: &AppState, errors: Vec<String>) -> Result<Response, ApiError> {
    let folders = state.gallery().list_folders().await?;
    Ok(ManagePage::new(folders)
        .with_upload_errors(errors)
        .into_response())
}

/// GET /get_files/:folder_name - Files of a folder as JSON.
pub async fn get_files(
    State(state): State<Arc<AppState>>,
    Path(folder_name): Path<String>,
) -> Result<Response, ApiError> {
    match state.gallery().get_files(&folder_name).await? {
        Some(files) => Ok(Json(FolderFilesResponse::from(files)).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(MissingFolderResponse::default()),
        )
            .into_response()),
    }
}

/// GET /health - Liveness check.
pub async fn health_check() -> &'static str {
    "OK"
}

#[axum::async_trait]
impl<S> FromRequest<S> for ManageSubmission
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("multipart/form-data"))
            .unwrap_or(false);

        if !is_multipart {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(ManageSubmission::from_text_fields(fields));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let mut name = None;
        let mut upload = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(IntoResponse::into_response)?
        {
            let field_name = field.name().unwrap_or_default().to_string();
            match field_name.as_str() {
                "file" | "thumbnail" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let content = field.bytes().await.map_err(IntoResponse::into_response)?;
                    // A file input left empty is sent with an empty filename.
                    let part = (!filename.is_empty()).then(|| FilePart {
                        filename,
                        content: content.to_vec(),
                    });
                    if field_name == "file" {
                        upload.file = part;
                    } else {
                        upload.thumbnail = part;
                    }
                }
                "name" => {
                    name = Some(field.text().await.map_err(IntoResponse::into_response)?);
                }
                "folder_name" => {
                    upload.folder_name =
                        field.text().await.map_err(IntoResponse::into_response)?;
                }
                _ => {}
            }
        }

        Ok(match name {
            Some(name) => ManageSubmission::Folder(FolderForm { name }),
            None => ManageSubmission::Upload(upload),
        })
    }
}
