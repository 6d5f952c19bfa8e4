//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::path::PathBuf;

/// Result of a file storage operation
#[derive(Debug, Clone)]
pub struct StoreResult {
    pub file_name: String,
    pub file_path: PathBuf,
    pub size: u64,
}

/// Result of a file retrieval operation
#[derive(Debug, Clone)]
pub struct RetrieveResult {
    pub file_name: String,
    pub file_path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Result of a file deletion operation
///
/// Absence of the target is an outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteResult {
    Deleted { file_name: String },
    NotFound { file_name: String },
}
