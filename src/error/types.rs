//! Error types
//!
//! Defines domain-specific error types for the file gateway.

use std::fmt;
use std::io;

/// Storage module errors
///
/// Each variant carries the file name (or path) involved and the underlying
/// I/O error as its source.
#[derive(Debug)]
pub enum StorageError {
    CreateDirFailed { path: String, source: io::Error },
    WriteFailed { name: String, source: io::Error },
    ReadFailed { name: String, source: io::Error },
    DeleteFailed { name: String, source: io::Error },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::CreateDirFailed { path, source } => {
                write!(f, "Failed to create directory {}: {}", path, source)
            }
            StorageError::WriteFailed { name, source } => {
                write!(f, "Failed to store file: {}: {}", name, source)
            }
            StorageError::ReadFailed { name, source } => {
                write!(f, "Failed to read file: {}: {}", name, source)
            }
            StorageError::DeleteFailed { name, source } => {
                write!(f, "Failed to delete file: {}: {}", name, source)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::CreateDirFailed { source, .. }
            | StorageError::WriteFailed { source, .. }
            | StorageError::ReadFailed { source, .. }
            | StorageError::DeleteFailed { source, .. } => Some(source),
        }
    }
}

/// General gateway error that encompasses all operation failures
#[derive(Debug)]
pub enum GatewayError {
    /// Required file name missing, empty, or escaping the root directory
    InvalidInput(String),
    /// Requested file absent or not a regular file
    NotFound(String),
    /// Underlying I/O failure during store, read, or delete
    Storage(StorageError),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            GatewayError::NotFound(name) => write!(f, "Could not read file: {}", name),
            GatewayError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GatewayError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StorageError> for GatewayError {
    fn from(error: StorageError) -> Self {
        GatewayError::Storage(error)
    }
}
