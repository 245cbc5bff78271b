//! Configuration data structures for the settings registry.
//!
//! These structs are populated by deserializing `settings.toml`. Missing
//! fields take their values from [`super::defaults`]; unknown fields are
//! rejected through `#[serde(deny_unknown_fields)]`.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults;

/// Settings for the logging subsystem.
///
/// # Examples
///
/// ```
/// use novade_settings::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let config: LoggingConfig = toml::from_str(r#"
/// level = "debug"
/// file_path = "/var/log/novade/settings.log"
/// format = "json"
/// "#).unwrap();
/// assert_eq!(config.level, "debug");
/// assert_eq!(config.file_path, Some(PathBuf::from("/var/log/novade/settings.log")));
/// assert_eq!(config.format, "json");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of "trace", "debug", "info", "warn", "error" (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Log file. `None` disables file logging.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// "text" or "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Menu navigation policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationConfig {
    /// Stepping past the upper bound of an enforced range wraps to the
    /// lower bound instead of clamping.
    #[serde(default = "defaults::default_wraparound")]
    pub wraparound_setting_enable: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        defaults::default_navigation_config()
    }
}

/// Sizing of a freshly created registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryLimits {
    /// Entries reserved up front. Must be at least 1.
    #[serde(default = "defaults::default_initial_capacity")]
    pub initial_capacity: usize,
}

impl Default for RegistryLimits {
    fn default() -> Self {
        defaults::default_registry_limits()
    }
}

/// Root configuration of the settings registry.
///
/// # Examples
///
/// ```
/// use novade_settings::config::RegistryConfig;
///
/// let config: RegistryConfig = toml::from_str(r#"
/// [navigation]
/// wraparound_setting_enable = true
/// "#).unwrap();
/// assert!(config.wraparound());
/// assert_eq!(config.logging.level, "info");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub registry: RegistryLimits,
}

impl RegistryConfig {
    /// The wraparound policy handed to actions and string parsing.
    pub fn wraparound(&self) -> bool {
        self.navigation.wraparound_setting_enable
    }
}
