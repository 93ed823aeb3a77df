//! Admin session cookie and extractor.

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::auth::SessionClaims;
use crate::web::handlers::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "gallery_session";

/// Build the session cookie for a signed token.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Extractor for the authenticated admin.
///
/// Requests without a valid session cookie are redirected to the login
/// page.
#[derive(Debug, Clone)]
pub struct AdminSession(pub SessionClaims);

#[axum::async_trait]
impl FromRequestParts<Arc<AppState>> for AdminSession {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or_else(|| Redirect::to("/"))?;

        let claims = state.sessions.verify(&token).map_err(|e| {
            tracing::debug!("Session rejected: {}", e);
            Redirect::to("/")
        })?;

        // A token signed for a previous admin name no longer grants access.
        if claims.sub != state.credentials.username() {
            tracing::debug!(sub = %claims.sub, "Session for unknown user rejected");
            return Err(Redirect::to("/"));
        }

        Ok(AdminSession(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("token".to_string(), true);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "token");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn test_session_cookie_insecure() {
        let cookie = session_cookie("token".to_string(), false);
        assert_eq!(cookie.secure(), Some(false));
    }
}
