//! Storage operations
//!
//! Handles file system operations for the gateway: store, retrieve, and
//! delete against the upload root. Each operation is a single synchronous
//! step; concurrent calls on the same name are resolved by filesystem
//! semantics (last writer wins).

use log::{error, info};
use std::fs;
use std::path::Path;

use crate::error::{GatewayError, StorageError};
use crate::storage::results::{DeleteResult, RetrieveResult, StoreResult};
use crate::storage::validation::resolve_within_root;

/// Stores `bytes` under `root/name`, overwriting any existing content.
///
/// The root directory (and any parent directories the resolved name needs)
/// is created lazily on first use.
pub fn store_file(root: &Path, name: &str, bytes: &[u8]) -> Result<StoreResult, GatewayError> {
    let file_path = resolve_within_root(root, name)?;

    let parent = file_path.parent().unwrap_or(root);
    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|e| {
            error!("Failed to create directory {}: {}", parent.display(), e);
            StorageError::CreateDirFailed {
                path: parent.to_string_lossy().to_string(),
                source: e,
            }
        })?;
    }

    fs::write(&file_path, bytes).map_err(|e| {
        error!("Failed to store file {} ({}): {}", name, file_path.display(), e);
        StorageError::WriteFailed {
            name: name.to_string(),
            source: e,
        }
    })?;

    info!("Stored file {} ({} bytes) at {}", name, bytes.len(), file_path.display());

    Ok(StoreResult {
        file_name: name.to_string(),
        file_path,
        size: bytes.len() as u64,
    })
}

/// Retrieves the content of `root/name`.
///
/// A path that does not exist or is not a regular file yields `NotFound`;
/// a read failure on an existing file yields a storage error.
pub fn retrieve_file(root: &Path, name: &str) -> Result<RetrieveResult, GatewayError> {
    let file_path = resolve_within_root(root, name)?;

    if !file_path.is_file() {
        return Err(GatewayError::NotFound(name.to_string()));
    }

    let bytes = fs::read(&file_path).map_err(|e| {
        error!("Failed to read file {} ({}): {}", name, file_path.display(), e);
        StorageError::ReadFailed {
            name: name.to_string(),
            source: e,
        }
    })?;

    info!("Retrieved file {} ({} bytes) from {}", name, bytes.len(), file_path.display());

    Ok(RetrieveResult {
        file_name: name.to_string(),
        file_path,
        bytes,
    })
}

/// Deletes `root/name` if it exists.
///
/// Absence is reported as `DeleteResult::NotFound` rather than an error;
/// only a failed removal of an existing file is an error.
pub fn delete_file(root: &Path, name: &str) -> Result<DeleteResult, GatewayError> {
    let file_path = resolve_within_root(root, name)?;

    if !file_path.exists() {
        info!("Delete requested for missing file {} ({})", name, file_path.display());
        return Ok(DeleteResult::NotFound {
            file_name: name.to_string(),
        });
    }

    fs::remove_file(&file_path).map_err(|e| {
        error!("Failed to delete file {} ({}): {}", name, file_path.display(), e);
        StorageError::DeleteFailed {
            name: name.to_string(),
            source: e,
        }
    })?;

    info!("Deleted file {} ({})", name, file_path.display());

    Ok(DeleteResult::Deleted {
        file_name: name.to_string(),
    })
}
