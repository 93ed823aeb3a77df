//! Test helpers for web integration tests.
//!
//! Builds a router over an in-memory database and temporary upload
//! directories.

#![allow(dead_code)]

use std::sync::Arc;

use axum_extra::extract::cookie::Cookie;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use tempfile::TempDir;

use gallery::auth::{CredentialChecker, SessionManager};
use gallery::web::{create_router, AppState};
use gallery::{Database, GalleryStorage};

/// Admin username used by the test server.
pub const ADMIN_USERNAME: &str = "admin";

/// Admin password used by the test server.
pub const ADMIN_PASSWORD: &str = "correct horse";

/// Session signing secret used by the test server.
pub const SESSION_SECRET: &str = "test-secret-key-for-testing-only";

/// A running test application.
pub struct TestApp {
    pub server: TestServer,
    pub db: Database,
    pub storage: GalleryStorage,
    /// Keeps the upload directories alive.
    pub dir: TempDir,
}

/// Create a test server with an in-memory database.
pub async fn create_test_app() -> TestApp {
    create_test_app_with_limit(None).await
}

/// Create a test server with a request body limit.
pub async fn create_test_app_with_limit(max_upload_bytes: Option<usize>) -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let storage = GalleryStorage::new(dir.path().join("files"), dir.path().join("thumbnails"))
        .expect("Failed to create storage");

    // Low bcrypt cost keeps the tests fast; the format matches legacy hashes.
    let hash = bcrypt::hash(ADMIN_PASSWORD, 4).expect("Failed to hash password");

    let app_state = Arc::new(
        AppState::new(
            db.clone(),
            storage.clone(),
            CredentialChecker::new(ADMIN_USERNAME, hash),
            SessionManager::new(SESSION_SECRET, 3600),
        )
        .with_cookie_secure(false),
    );

    let router = create_router(app_state, max_upload_bytes);
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        db,
        storage,
        dir,
    }
}

/// Log in as the admin and return the session cookie.
pub async fn login(server: &TestServer) -> Cookie<'static> {
    let response = server
        .post("/")
        .form(&[("username", ADMIN_USERNAME), ("password", ADMIN_PASSWORD)])
        .await;
    response.cookie("gallery_session")
}

/// Create a folder through the management page.
pub async fn create_folder(server: &TestServer, cookie: &Cookie<'static>, name: &str) {
    let response = server
        .post("/Upload")
        .add_cookie(cookie.clone())
        .form(&[("name", name)])
        .await;
    assert_eq!(response.status_code(), 303, "folder {name} not created");
}

/// Multipart body for the upload form.
pub fn upload_form(folder: &str, file_name: &str, thumbnail_name: &str) -> MultipartForm {
    MultipartForm::new()
        .add_part(
            "file",
            Part::bytes(b"file content".to_vec())
                .file_name(file_name)
                .mime_type("application/octet-stream"),
        )
        .add_part(
            "thumbnail",
            Part::bytes(b"\x89PNG thumbnail".to_vec())
                .file_name(thumbnail_name)
                .mime_type("image/png"),
        )
        .add_text("folder_name", folder)
}
