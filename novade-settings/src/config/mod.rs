//! Configuration of the settings registry itself.
//!
//! This is not where settings are persisted. It controls how the registry
//! behaves: the logging setup, the navigation wraparound policy and the
//! initial registry size.
//!
//! - [`types`]: [`RegistryConfig`] and its sections.
//! - [`defaults`]: values used for anything `settings.toml` leaves out.
//! - [`loader`]: [`ConfigLoader`], which reads and validates `settings.toml`.
//!
//! ```rust,ignore
//! use novade_settings::config::ConfigLoader;
//!
//! let config = match ConfigLoader::load() {
//!     Ok(config) => config,
//!     Err(e) => {
//!         novade_settings::logging::init_minimal_logging();
//!         tracing::error!("Configuration error: {}", e);
//!         Default::default()
//!     }
//! };
//! ```

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{LoggingConfig, NavigationConfig, RegistryConfig, RegistryLimits};
