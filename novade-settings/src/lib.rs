//! # NovaDE Settings Registry (`novade-settings`)
//!
//! `novade-settings` is the in-memory model behind NovaDE's configuration
//! menus. Each [`Setting`] wraps a shared handle to a live application
//! variable and describes its type, label, grouping, bounds and flags,
//! together with the navigation behavior the menu layer drives: start, left,
//! right, ok and select.
//!
//! ## Overview
//!
//! - **Descriptors** ([`setting`]): the [`Setting`] record, its per-kind
//!   action handlers and renderers, and the factories that wire them.
//! - **Registry** ([`registry`]): [`SettingsList`], an ordered list with a
//!   doubling logical capacity, plus lookup by name.
//! - **Builder** ([`builder`]): [`SettingsBuilder`] for declaring groups,
//!   subgroups and typed settings in presentation order.
//! - **Collaborators** ([`context`]): [`ActionContext`] lends the command
//!   dispatcher, the input-binding subsystem and the wraparound policy to
//!   action handlers.
//! - **Ambient**: [`error`], [`config`], [`logging`] and [`utils`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use novade_settings::builder::{Handlers, SettingsBuilder};
//! use novade_settings::config::ConfigLoader;
//! use novade_settings::context::ActionContext;
//! use novade_settings::logging::initialize_logging;
//! use novade_settings::setting::{shared, SettingAction};
//!
//! fn main() -> Result<(), novade_settings::SettingsError> {
//!     let config = ConfigLoader::load()?;
//!     initialize_logging(&config.logging, false)?;
//!
//!     let volume = shared(0.5f32);
//!     let mut builder = SettingsBuilder::with_config(&config)?;
//!     builder
//!         .start_group("Audio")?
//!         .config_float(volume.clone(), "audio_volume", "Volume", 0.5, "%.1f", Handlers::none())?
//!         .add_range(0.0, 1.0, 0.1, true, true)?
//!         .end_group()?;
//!     let mut list = builder.into_list();
//!
//!     let mut ctx = ActionContext::from_config(&config);
//!     if let Some(setting) = list.find_mut("audio_volume") {
//!         setting.invoke(SettingAction::Right, &mut ctx)?;
//!     }
//!     tracing::info!(volume = volume.get(), "Volume raised");
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod registry;
pub mod setting;
pub mod utils;

pub use builder::{Handlers, SettingsBuilder};
pub use config::{ConfigLoader, LoggingConfig, RegistryConfig};
pub use context::{ActionContext, CommandDispatcher, CommandEvent, InputBindings};
pub use error::{ConfigError, LoggingError, SettingsError, SettingsResult};
pub use logging::{init_minimal_logging, initialize_logging};
pub use registry::SettingsList;
pub use setting::{
    Keybind, Setting, SettingAction, SettingFlags, SettingKind, SettingValue, Target,
};
