//! Web server for the gallery.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::db::Database;
use crate::gallery::GalleryStorage;
use crate::{GalleryError, Result};

use super::handlers::AppState;
use super::router::create_router;

/// Web server for the gallery.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Request body limit.
    max_upload_bytes: Option<usize>,
}

impl WebServer {
    /// Create a new web server.
    ///
    /// # Errors
    /// `Config` if the host and port do not form a socket address.
    pub fn new(config: &Config, db: Database, storage: GalleryStorage) -> Result<Self> {
        let addr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| {
                GalleryError::Config(format!(
                    "invalid server address {}:{}: {}",
                    config.server.host, config.server.port, e
                ))
            })?;

        Ok(Self {
            addr,
            app_state: Arc::new(AppState::from_config(config, db, storage)),
            max_upload_bytes: config.max_upload_bytes(),
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the web server.
    pub async fn run(self) -> std::result::Result<(), std::io::Error> {
        let router = create_router(self.app_state, self.max_upload_bytes);

        let listener = TcpListener::bind(self.addr).await?;
        tracing::info!("Web server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, router).await
    }

    /// Run the server in the background and return the bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> std::result::Result<SocketAddr, std::io::Error> {
        let router = create_router(self.app_state, self.max_upload_bytes);

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn test_config() -> Config {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;
        config.auth.username = "admin".to_string();
        config.auth.password_hash = "unused".to_string();
        config.auth.session_secret = "test-secret".to_string();
        config
    }

    async fn setup() -> (TempDir, Database, GalleryStorage) {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::open_in_memory().await.unwrap();
        let storage = GalleryStorage::new(
            temp_dir.path().join("files"),
            temp_dir.path().join("thumbnails"),
        )
        .unwrap();
        (temp_dir, db, storage)
    }

    #[tokio::test]
    async fn test_web_server_new() {
        let config = test_config();
        let (_dir, db, storage) = setup().await;

        let server = WebServer::new(&config, db, storage).unwrap();
        assert_eq!(server.addr().ip().to_string(), "127.0.0.1");
    }

    #[tokio::test]
    async fn test_web_server_invalid_host() {
        let mut config = test_config();
        config.server.host = "not a host".to_string();
        let (_dir, db, storage) = setup().await;

        let result = WebServer::new(&config, db, storage);
        assert!(matches!(result, Err(GalleryError::Config(_))));
    }

    #[tokio::test]
    async fn test_web_server_run() {
        let config = test_config();
        let (_dir, db, storage) = setup().await;

        let server = WebServer::new(&config, db, storage).unwrap();
        let addr = server.run_with_addr().await.unwrap();

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.ends_with("OK"));
    }
}
