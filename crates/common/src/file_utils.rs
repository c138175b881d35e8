use std::path::Path;
use thiserror::Error;

/// Reasons a file name coming from the server is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileNameError {
    #[error("file name is empty")]
    Empty,
    #[error("file name contains a null byte")]
    ContainsNullByte,
    #[error("file name contains a path separator (/ or \\)")]
    ContainsPathSeparator,
    #[error("file name cannot be '.' or '..'")]
    IsSpecialDirectory,
    #[error("file name does not name a file")]
    NotAFileName,
}

/// Check that a remote file name can be joined onto the destination
/// directory without escaping it.
pub fn validate_file_name(file_name: &str) -> Result<(), FileNameError> {
    if file_name.is_empty() {
        return Err(FileNameError::Empty);
    }
    if file_name.contains('\0') {
        return Err(FileNameError::ContainsNullByte);
    }
    if file_name.contains('/') || file_name.contains('\\') {
        return Err(FileNameError::ContainsPathSeparator);
    }
    if file_name == "." || file_name == ".." {
        return Err(FileNameError::IsSpecialDirectory);
    }

    // Rejects anything the platform would normalise into a different name
    match Path::new(file_name).file_name().and_then(|n| n.to_str()) {
        Some(name) if name == file_name => Ok(()),
        _ => Err(FileNameError::NotAFileName),
    }
}
