//! HTTP surface
//!
//! Routes under `/api/files` for upload, download, and delete, plus the
//! mapping from gateway errors to HTTP responses.

pub mod handlers;
pub mod responses;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use tower_http::limit::RequestBodyLimitLayer;

use crate::config::ServerConfig;

/// Builds the application router with the configured body size cap.
pub fn router(config: Arc<ServerConfig>) -> Router {
    Router::new()
        .route("/api/files/upload", post(handlers::handle_upload))
        .route("/api/files/download/:file_name", get(handlers::handle_download))
        .route("/api/files/delete/:file_name", delete(handlers::handle_delete))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_upload_size_bytes()))
        .with_state(config)
}
