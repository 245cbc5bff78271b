//! Logging setup for applications embedding the settings registry.
//!
//! The registry itself only emits `tracing` events: growth and group
//! boundaries at `debug`, appends and action dispatch at `trace`, failed
//! allocations, missing default binds and declined captures at `warn`. This
//! module installs a subscriber to collect them, either a minimal stderr one
//! or one driven by [`LoggingConfig`].

use std::io::{self, stdout};
use std::path::Path;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;
use crate::error::{LoggingError, SettingsError};
use crate::utils;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

const DEFAULT_LOG_FILE_NAME: &str = "novade-settings.log";

/// Keeps the non-blocking file writer alive so buffered lines get flushed.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Meant for tests and for early startup before [`RegistryConfig`] is
/// loaded. Does nothing if a global subscriber is already set.
///
/// [`RegistryConfig`]: crate::config::RegistryConfig
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Builds a filter from a directive such as `"debug"` or
/// `"novade_settings=trace"`.
fn build_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|e| LoggingError::FilterError(format!("'{}': {}", directive, e)))
}

fn parse_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        invalid => Err(LoggingError::InitializationFailure(format!(
            "Invalid log level in config: {}",
            invalid
        ))),
    }
}

/// Daily-rolling file layer writing to `log_path`. Creates the parent
/// directory if needed.
fn create_file_layer(log_path: &Path, format: &str) -> Result<(BoxedLayer, WorkerGuard), SettingsError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            utils::fs::ensure_dir_exists(parent)?;
            parent
        }
        _ => Path::new("."),
    };
    let file_name = log_path
        .file_name()
        .map_or_else(|| DEFAULT_LOG_FILE_NAME.to_string(), |name| name.to_string_lossy().into_owned());

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|e| LoggingError::IoError(io::Error::new(io::ErrorKind::Other, e)))?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer = if format.eq_ignore_ascii_case("json") {
        fmt::layer().json().with_writer(writer).with_ansi(false).boxed()
    } else {
        fmt::layer().with_writer(writer).with_ansi(false).boxed()
    };
    Ok((layer, guard))
}

/// Installs the global subscriber described by `config`: a stdout layer and,
/// when `file_path` is set, a daily-rolling file layer. Both use
/// `config.format`.
///
/// # Errors
///
/// - [`LoggingError::InitializationFailure`] for an unknown level, or when a
///   subscriber is already installed and `is_reload` is `false`.
/// - [`LoggingError::FilterError`] if the level does not form a valid filter.
/// - [`SettingsError::Filesystem`] if the log directory cannot be created.
/// - [`LoggingError::IoError`] if the rolling log file cannot be opened.
///
/// With `is_reload` set, an already installed subscriber is left in place
/// and the call succeeds.
pub fn initialize_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), SettingsError> {
    let level = parse_level(&config.level)?.to_string();

    let stdout_filter = build_filter(&level)?;
    let stdout_layer: BoxedLayer = if config.format.eq_ignore_ascii_case("json") {
        fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(stdout_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(stdout_filter)
            .boxed()
    };

    let mut layers = vec![stdout_layer];
    let mut new_guard = None;
    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        layers.push(file_layer.with_filter(build_filter(&level)?).boxed());
        new_guard = Some(guard);
    }

    let result = Registry::default().with(layers).try_init();

    match LOG_WORKER_GUARD.lock() {
        // Replacing the slot drops (and flushes) the previous writer.
        Ok(mut slot) => *slot = new_guard,
        Err(e) => eprintln!("[ERROR] Failed to lock log worker guard: {}. Log flushing may be affected.", e),
    }

    match result {
        Ok(()) => Ok(()),
        Err(e) if is_reload => {
            eprintln!("[INFO] Logging reload requested but a subscriber is already installed: {}", e);
            Ok(())
        }
        Err(e) => Err(LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        ))
        .into()),
    }
}
