//! Error handling for the NovaDE settings registry.
//!
//! Every fallible operation in this crate communicates failure through a
//! `Result` carrying one of the error types defined here. The registry never
//! panics on bad input: a missing target, a declined bind capture or a failed
//! allocation are all reported to the caller, who decides whether the failure
//! is fatal to configuration bring-up.
//!
//! The main error type for this crate is [`SettingsError`], which wraps the more
//! specific [`ConfigError`] and [`LoggingError`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use novade_settings::error::SettingsError;
//!
//! fn register_video_settings(list: &mut SettingsList) -> Result<(), SettingsError> {
//!     // ... builder calls ...
//!     Ok(())
//! }
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::setting::SettingKind;

/// Core error type for the settings registry.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A value-carrying setting has no live target to read from or write to.
    #[error("Setting '{name}' has no target")]
    MissingTarget { name: String },

    /// The application holds a borrow of the target while the registry
    /// tries to write it.
    #[error("Target of setting '{name}' is borrowed elsewhere")]
    TargetBusy { name: String },

    /// A target handle of the wrong shape was attached to a setting.
    #[error("Setting '{name}' expected a {expected} target but holds {found}")]
    KindMismatch {
        name: String,
        expected: SettingKind,
        found: &'static str,
    },

    /// Growing the registry storage failed. The registry is left unmodified.
    #[error("Failed to grow settings registry to {requested} entries")]
    Allocation { requested: usize },

    /// A "current entry" operation was attempted on an empty registry.
    #[error("Settings registry is empty")]
    EmptyRegistry,

    /// The default binding table has no entry for the requested bind type.
    #[error("No default binding for bind type {bind_type}")]
    BindLookup { bind_type: u32 },

    /// The input-binding subsystem declined to start a single-binding capture.
    #[error("Input binding capture declined for setting '{name}'")]
    BindCapture { name: String },

    /// An action needed an external collaborator that was not supplied.
    #[error("Required collaborator is not available: {0}")]
    CollaboratorMissing(&'static str),

    /// Errors related to loading or validating the registry configuration.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised while setting up the logging system.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// Filesystem errors with the path that caused them.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// General I/O errors not covered by other variants.
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),
}

/// Error type for configuration-related operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while attempting to read a configuration file.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but holds invalid values.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g., XDG config home) could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging-related operations.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to initialize the logging system.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),

    /// Failed to set or parse a log filter.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),

    /// An I/O error occurred during logging.
    #[error("Logging I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Convenience alias used throughout the crate.
pub type SettingsResult<T> = Result<T, SettingsError>;
