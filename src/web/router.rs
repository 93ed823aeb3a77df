//! Router configuration for the web interface.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::handlers::{
    get_files, health_check, home, login, login_page, manage_page, manage_submit, AppState,
};
use super::middleware::security_headers;

/// Create the main router.
///
/// `max_upload_bytes` caps request bodies; `None` lifts the limit.
pub fn create_router(app_state: Arc<AppState>, max_upload_bytes: Option<usize>) -> Router {
    let body_limit = match max_upload_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    let files = ServeDir::new(app_state.storage.files_dir());
    let thumbnails = ServeDir::new(app_state.storage.thumbnails_dir());

    Router::new()
        .route("/", get(login_page).post(login))
        .route("/Home", get(home))
        .route("/Upload", get(manage_page).post(manage_submit))
        .route("/get_files/:folder_name", get(get_files))
        .nest_service("/Files", files)
        .nest_service("/thumbnails", thumbnails)
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(security_headers))
                .layer(body_limit),
        )
        .with_state(app_state)
}
