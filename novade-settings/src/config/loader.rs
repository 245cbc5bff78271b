//! Loading and validation of [`RegistryConfig`].
//!
//! [`ConfigLoader::load`] reads `settings.toml` from the application config
//! directory (see [`get_app_config_dir`]). A missing file is not an error:
//! the defaults are used instead. Whatever is loaded is then validated:
//!
//! - the log level and log format are lowercased and checked,
//! - `registry.initial_capacity` must be at least 1.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::config::RegistryConfig;
use crate::error::{ConfigError, SettingsError};
use crate::utils::paths::get_app_config_dir;

/// File name looked up inside the application config directory.
pub const CONFIG_FILE_NAME: &str = "settings.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Namespace for the configuration loading entry points.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `settings.toml` from the application config directory.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DirectoryUnavailable`] if no config directory exists
    ///   on this platform.
    /// - [`ConfigError::ReadError`] for read failures other than a missing file.
    /// - [`ConfigError::ParseError`] / [`ConfigError::ValidationError`] for
    ///   bad contents.
    pub fn load() -> Result<RegistryConfig, SettingsError> {
        let path = get_app_config_dir()?.join(CONFIG_FILE_NAME);
        Self::load_from_path(&path)
    }

    /// Loads the configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from_path(path: &Path) -> Result<RegistryConfig, SettingsError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!(path = %path.display(), "Loading registry configuration");
                Self::load_from_str(&content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No registry configuration file, using defaults");
                let mut config = RegistryConfig::default();
                Self::validate_config(&mut config)?;
                Ok(config)
            }
            Err(e) => Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            }
            .into()),
        }
    }

    /// Parses and validates TOML text. Blank text yields the defaults.
    pub fn load_from_str(content: &str) -> Result<RegistryConfig, SettingsError> {
        let mut config = if content.trim().is_empty() {
            RegistryConfig::default()
        } else {
            toml::from_str(content).map_err(ConfigError::ParseError)?
        };
        Self::validate_config(&mut config)?;
        Ok(config)
    }

    fn validate_config(config: &mut RegistryConfig) -> Result<(), SettingsError> {
        let level = config.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                config.logging.level
            ))
            .into());
        }
        config.logging.level = level;

        let format = config.logging.format.to_lowercase();
        if !LOG_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log format: '{}'. Must be one of text, json.",
                config.logging.format
            ))
            .into());
        }
        config.logging.format = format;

        if config.registry.initial_capacity == 0 {
            return Err(ConfigError::ValidationError(
                "registry.initial_capacity must be at least 1.".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
