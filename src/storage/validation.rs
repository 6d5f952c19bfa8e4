//! Path validation
//!
//! Handles file name validation and path resolution security checks.

use std::path::{Component, Path, PathBuf};

use crate::error::GatewayError;

/// Validate a caller-supplied file name.
///
/// Rejects empty or whitespace-only names and names containing NUL bytes.
pub fn validate_file_name(name: &str) -> Result<(), GatewayError> {
    if name.trim().is_empty() {
        return Err(GatewayError::InvalidInput("File name is required".into()));
    }
    if name.contains('\0') {
        return Err(GatewayError::InvalidInput(format!(
            "File name contains invalid characters: {}",
            name.replace('\0', "\\0")
        )));
    }
    Ok(())
}

/// Resolve `root/name` and verify the result stays under the root.
///
/// Normalization is lexical (`.` and `..` components are collapsed without
/// touching the filesystem) because the target of a store does not exist yet.
/// A name whose normalized form escapes the root is rejected.
pub fn resolve_within_root(root: &Path, name: &str) -> Result<PathBuf, GatewayError> {
    validate_file_name(name)?;

    let normalized_root = normalize_lexically(root);
    let resolved = normalize_lexically(&root.join(name));

    if !resolved.starts_with(&normalized_root) || resolved == normalized_root {
        return Err(GatewayError::InvalidInput(format!(
            "Path traversal attempt: {}",
            name
        )));
    }

    Ok(resolved)
}

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// A `..` at the top of the stack pops the previous normal component; a `..`
/// with nothing left to pop is kept, so relative roots like `./uploads`
/// normalize consistently on both sides of the containment check.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    normalized.pop();
                } else {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
