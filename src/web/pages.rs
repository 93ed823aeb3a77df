//! HTML pages rendered with askama.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::gallery::Folder;

/// Render a template into an HTML response.
fn render(template: &impl Template) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("template render failed, err={}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to render page".to_string(),
            )
                .into_response()
        }
    }
}

/// Login page.
#[derive(Template, Default)]
#[template(path = "login.html")]
pub struct LoginPage {}

impl IntoResponse for LoginPage {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// Public folder listing.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    /// Folders in storage order.
    pub folders: Vec<Folder>,
}

impl IntoResponse for HomePage {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// Management page with the folder and upload forms.
#[derive(Template, Default)]
#[template(path = "manage.html")]
pub struct ManagePage {
    /// Existing folders, also the upload form's choices.
    pub folders: Vec<Folder>,
    /// Errors for the folder form.
    pub folder_errors: Vec<String>,
    /// Errors for the upload form.
    pub upload_errors: Vec<String>,
    /// Value to refill the folder name input with.
    pub folder_name_input: String,
}

impl ManagePage {
    /// A page without errors.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self {
            folders,
            ..Default::default()
        }
    }

    /// Show `errors` on the folder form and refill its input.
    pub fn with_folder_errors(mut self, input: impl Into<String>, errors: Vec<String>) -> Self {
        self.folder_name_input = input.into();
        self.folder_errors = errors;
        self
    }

    /// Show `errors` on the upload form.
    pub fn with_upload_errors(mut self, errors: Vec<String>) -> Self {
        self.upload_errors = errors;
        self
    }
}

impl IntoResponse for ManagePage {
    fn into_response(self) -> Response {
        render(&self)
    }
}
