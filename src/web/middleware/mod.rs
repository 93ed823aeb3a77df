//! Middleware and extractors for the web layer.

pub mod security;
pub mod session;

pub use security::security_headers;
pub use session::{session_cookie, AdminSession, SESSION_COOKIE};
