//! Web interface for the gallery.
//!
//! HTML pages for login, browsing and management, a small JSON browse
//! API and static serving of the two upload directories.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
