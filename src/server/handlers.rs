//! Request handlers
//!
//! - GET /health - Liveness and version
//! - anything not on disk - the app shell, 200 for known routes, 404 otherwise

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::Shell;
use crate::routes::Route;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

/// GET /health
pub async fn health(State(shell): State<Arc<Shell>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: shell.started.elapsed().as_secs(),
    })
}

/// History-API fallback: every path the static directory can't satisfy gets
/// `index.html` so the client router can take over. Unknown routes still
/// render (the client shows its not-found screen) but with a 404 status.
pub async fn spa_fallback(State(shell): State<Arc<Shell>>, uri: Uri) -> Response {
    let status = match Route::from_path(uri.path()) {
        Some(_) => StatusCode::OK,
        None => {
            tracing::debug!(path = %uri.path(), "Unknown route, serving shell with 404");
            StatusCode::NOT_FOUND
        }
    };
    (status, Html(shell.index_html.clone())).into_response()
}
