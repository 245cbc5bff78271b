//! Path resolution for the settings registry.
//!
//! Two concerns live here:
//!
//! - Locating the registry's own configuration directory through the XDG
//!   base directories (`directories-next`), e.g. `~/.config/novade-settings`.
//! - Expanding and shortening the user-facing paths stored in Path, Dir and
//!   StringOptions settings.
//!
//! Directory lookups return [`SettingsError::Config`] with
//! [`ConfigError::DirectoryUnavailable`] when the platform cannot provide a
//! home directory.

use std::path::{Path, PathBuf};

use directories_next::{BaseDirs, ProjectDirs};

use crate::error::{ConfigError, SettingsError};

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "NovaDE";
const APPLICATION: &str = "novade-settings";

/// Returns the registry's configuration directory, where `settings.toml`
/// is looked up.
///
/// # Examples
/// ```
/// match novade_settings::utils::paths::get_app_config_dir() {
///     Ok(path) => println!("Registry config directory: {}", path.display()),
///     Err(e) => eprintln!("Error getting config dir: {}", e),
/// }
/// ```
pub fn get_app_config_dir() -> Result<PathBuf, SettingsError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            SettingsError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "App Config".to_string(),
            })
        })
}

/// Returns the user's home directory.
pub fn home_dir() -> Result<PathBuf, SettingsError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| {
            SettingsError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "Home".to_string(),
            })
        })
}

/// Directory of the running executable.
fn application_dir() -> Result<PathBuf, SettingsError> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        SettingsError::Config(ConfigError::DirectoryUnavailable {
            dir_type: "Application".to_string(),
        })
    })
}

fn join_rest(base: PathBuf, rest: &str) -> String {
    let rest = rest.trim_start_matches(['/', '\\']);
    if rest.is_empty() {
        base.to_string_lossy().into_owned()
    } else {
        base.join(rest).to_string_lossy().into_owned()
    }
}

/// Expands the special prefixes of a stored path.
///
/// - `~` or `~/...` is resolved against the home directory.
/// - `:` or `:/...` is resolved against the directory of the running
///   executable.
///
/// Anything else, and any prefix whose base directory cannot be resolved,
/// is returned unchanged.
pub fn expand_special(path: &str) -> String {
    if let Some(rest) = path.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with(['/', '\\']) {
            if let Ok(home) = home_dir() {
                return join_rest(home, rest);
            }
        }
    } else if let Some(rest) = path.strip_prefix(':') {
        if rest.is_empty() || rest.starts_with(['/', '\\']) {
            if let Ok(app_dir) = application_dir() {
                return join_rest(app_dir, rest);
            }
        }
    }
    path.to_string()
}

/// Short display form of a stored path: its final component.
///
/// Paths without a final component (`""`, `"/"`, `".."`) are returned as
/// they are.
pub fn short_representation(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
