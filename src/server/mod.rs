//! Echo bundle host
//!
//! Serves the built WASM front end, built with Axum.
//!
//! # Endpoints
//!
//! - `GET /health` - Liveness, version and uptime
//! - `GET /<file>` - Static files from the bundle directory
//! - `GET /<route>` - `index.html` for client-side routing
//!
//! # Example
//!
//! ```rust,ignore
//! use echo::config::Config;
//! use echo::server::serve;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     serve(&config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod handlers;

pub use error::{ServerError, ServerResult};
pub use handlers::HealthResponse;

use axum::{handler::Handler, routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;

/// Shared state: the cached app shell
pub struct Shell {
    index_html: String,
    started: Instant,
}

impl Shell {
    /// Read `index.html` from the bundle directory
    pub fn load(dist_dir: &Path) -> ServerResult<Self> {
        let index_path = dist_dir.join("index.html");
        let index_html = std::fs::read_to_string(&index_path)
            .map_err(|_| ServerError::MissingBundle(dist_dir.to_path_buf()))?;
        Ok(Self {
            index_html,
            started: Instant::now(),
        })
    }
}

/// Build the router for a bundle directory
pub fn build_router(dist_dir: &Path) -> ServerResult<Router> {
    let shell = Arc::new(Shell::load(dist_dir)?);

    let static_files =
        ServeDir::new(dist_dir).fallback(handlers::spa_fallback.with_state(Arc::clone(&shell)));

    Ok(Router::new()
        .route("/health", get(handlers::health))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(shell))
}

/// Start the bundle host
pub async fn serve(config: &ServerConfig) -> ServerResult<()> {
    let router = build_router(&config.dist_dir)?;

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(dist = ?config.dist_dir, "Echo listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(e.to_string()))?;

    tracing::info!("Echo shut down gracefully");
    Ok(())
}

/// Wait for Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>echo shell</body></html>";

    fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("echo-ui.js"), "console.log('echo')").unwrap();
        let router = build_router(dir.path()).unwrap();
        (router, dir)
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _dir) = create_test_app();
        let (status, body) = fetch(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (app, _dir) = create_test_app();
        let (status, body) = fetch(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_static_asset() {
        let (app, _dir) = create_test_app();
        let response = app
            .oneshot(Request::builder().uri("/echo-ui.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.contains("javascript"));
    }

    #[tokio::test]
    async fn test_known_routes_fall_back_to_shell() {
        for route in crate::routes::Route::ALL {
            let (app, _dir) = create_test_app();
            let (status, body) = fetch(app, route.path()).await;
            assert_eq!(status, StatusCode::OK, "route {}", route);
            assert_eq!(body, INDEX);
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_404_with_shell() {
        let (app, _dir) = create_test_app();
        let (status, body) = fetch(app, "/no-such-screen").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, INDEX);
    }

    #[test]
    fn test_missing_bundle() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            build_router(dir.path()),
            Err(ServerError::MissingBundle(_))
        ));
    }
}
