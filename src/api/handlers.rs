//! Request handlers
//!
//! One handler per gateway operation. Each handler resolves the upload root
//! from the shared config, delegates to the storage module, and renders the
//! plain-text confirmation the client expects.

use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use log::info;

use crate::config::ServerConfig;
use crate::error::GatewayError;
use crate::storage::{self, DeleteResult};

/// Handles `POST /api/files/upload`.
///
/// Expects a multipart body with a `file` field; the part's filename becomes
/// the storage key. A part without a filename is rejected before any I/O.
pub async fn handle_upload(
    State(config): State<Arc<ServerConfig>>,
    mut multipart: Multipart,
) -> Result<String, GatewayError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::InvalidInput(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| GatewayError::InvalidInput("File name is required".into()))?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| GatewayError::InvalidInput(format!("Failed to read upload body: {}", e)))?;

        let stored = storage::store_file(&config.upload_dir_path(), &file_name, &bytes)?;
        info!("Upload complete: {}", stored.file_path.display());

        return Ok(format!("File uploaded successfully: {}", stored.file_name));
    }

    Err(GatewayError::InvalidInput(
        "Missing multipart field: file".into(),
    ))
}

/// Handles `GET /api/files/download/:file_name`.
///
/// Serves the file as an octet-stream attachment.
pub async fn handle_download(
    State(config): State<Arc<ServerConfig>>,
    Path(file_name): Path<String>,
) -> Result<Response, GatewayError> {
    let retrieved = storage::retrieve_file(&config.upload_dir_path(), &file_name)?;
    info!("Download complete: {}", retrieved.file_path.display());

    let headers = [
        (
            header::CONTENT_TYPE,
            "application/octet-stream".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", retrieved.file_name),
        ),
    ];

    Ok((headers, retrieved.bytes).into_response())
}

/// Handles `DELETE /api/files/delete/:file_name`.
///
/// Deleting an absent file returns 404 with a not-found message, not an
/// error body.
pub async fn handle_delete(
    State(config): State<Arc<ServerConfig>>,
    Path(file_name): Path<String>,
) -> Result<Response, GatewayError> {
    let outcome = storage::delete_file(&config.upload_dir_path(), &file_name)?;

    let response = match outcome {
        DeleteResult::Deleted { file_name } => (
            StatusCode::OK,
            format!("File deleted successfully: {}", file_name),
        ),
        DeleteResult::NotFound { file_name } => (
            StatusCode::NOT_FOUND,
            format!("File not found: {}", file_name),
        ),
    };

    Ok(response.into_response())
}
