use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs::Metadata;
use std::path::Path;

/// Maximum size accepted for scan results and templates (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that already-fetched metadata describes a regular file.
///
/// The metadata must come from `symlink_metadata` so that a link is seen as
/// a link and not as its target.
///
/// # Arguments
/// * `metadata` - Metadata of `path`, not following symlinks
/// * `path` - The path the metadata belongs to (for error messages)
/// * `file_description` - What the file is ("scan results", "template")
///
/// # Errors
/// Returns an error if the path is a symbolic link or not a regular file
pub fn validate_regular_file(
    metadata: &Metadata,
    path: &Path,
    file_description: &str,
) -> Result<()> {
    if metadata.is_symlink() {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Symbolic links are not followed. Pass the path of the real file instead."
                .to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates that a path is not a symbolic link, if it exists at all.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation ("write") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let Ok(metadata) = std::fs::symlink_metadata(path) else {
        return Ok(());
    };

    if metadata.is_symlink() {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Choose an output path that is not a symbolic link.".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds `max_size`
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
