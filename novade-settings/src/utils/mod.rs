//! General utilities for the settings registry.
//!
//! # Submodules
//!
//! - [`hash`]: name fingerprints used for fast lookup.
//! - [`scan`]: `scanf`-style numeric prefix scanning.
//! - [`format`]: printf-style float formatting for Float settings.
//! - [`string_utils`]: fixed-capacity string truncation.
//! - [`paths`]: XDG directory lookup plus expansion and shortening of stored
//!   paths.
//! - [`fs`]: filesystem helpers.

pub mod format;
pub mod fs;
pub mod hash;
pub mod paths;
pub mod scan;
pub mod string_utils;

pub use format::format_float;
pub use fs::ensure_dir_exists;
pub use hash::fingerprint;
pub use string_utils::truncate_to_size;
