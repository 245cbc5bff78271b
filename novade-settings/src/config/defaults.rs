//! Default configuration values, referenced from `#[serde(default = ...)]`.

use std::path::PathBuf;

use super::types::{LoggingConfig, NavigationConfig, RegistryLimits};

pub(super) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None
}

pub(super) fn default_log_format() -> String {
    "text".to_string()
}

pub(super) fn default_navigation_config() -> NavigationConfig {
    NavigationConfig {
        wraparound_setting_enable: default_wraparound(),
    }
}

pub(super) fn default_wraparound() -> bool {
    false
}

pub(super) fn default_registry_limits() -> RegistryLimits {
    RegistryLimits {
        initial_capacity: default_initial_capacity(),
    }
}

pub(super) fn default_initial_capacity() -> usize {
    32
}
