//! Login handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;

use crate::web::dto::LoginForm;
use crate::web::error::ApiError;
use crate::web::middleware::session_cookie;
use crate::web::pages::LoginPage;

use super::AppState;

/// GET / - Login page.
pub async fn login_page() -> LoginPage {
    LoginPage {}
}

/// POST / - Credential submission.
///
/// A wrong username or password re-renders the login page without a
/// message and without a cookie.
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    let credentials = state.credentials.clone();
    let username = form.username.clone();
    let valid = tokio::task::spawn_blocking(move || credentials.check(&username, &form.password))
        .await
        .map_err(|e| {
            tracing::error!("Password check task failed: {}", e);
            ApiError::internal("Failed to check credentials")
        })?;

    if !valid {
        tracing::warn!(username = %form.username, "Login failed");
        return Ok(LoginPage {}.into_response());
    }

    let token = state.sessions.issue(&form.username).map_err(|e| {
        tracing::error!("Failed to issue session: {}", e);
        ApiError::internal("Failed to create session")
    })?;

    tracing::info!(username = %form.username, "Login succeeded");

    let jar = jar.add(session_cookie(token, state.cookie_secure));
    Ok((jar, Redirect::to("/Upload")).into_response())
}
