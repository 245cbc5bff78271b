//! Filesystem helpers.
//!
//! Failures are reported as [`SettingsError::Filesystem`] carrying the
//! offending path.

use std::fs;
use std::path::Path;

use crate::error::SettingsError;

/// Ensures that a directory exists at `path`, creating parents as needed.
///
/// Fails if the path exists but is not a directory.
///
/// # Examples
///
/// ```no_run
/// # use novade_settings::utils::fs::ensure_dir_exists;
/// # use tempfile::tempdir;
/// let temp_dir = tempdir().unwrap();
/// let log_dir = temp_dir.path().join("logs");
/// ensure_dir_exists(&log_dir).unwrap();
/// assert!(log_dir.is_dir());
/// ```
pub fn ensure_dir_exists(path: &Path) -> Result<(), SettingsError> {
    if path.exists() {
        if path.is_dir() {
            return Ok(());
        }
        return Err(SettingsError::Filesystem {
            message: "Path exists but is not a directory".to_string(),
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "Path exists but is not a directory",
            ),
        });
    }
    fs::create_dir_all(path).map_err(|e| SettingsError::Filesystem {
        message: "Failed to create directory".to_string(),
        path: path.to_path_buf(),
        source: e,
    })
}
