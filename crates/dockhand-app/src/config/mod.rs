//! Configuration file parsing for Dockhand
//!
//! One file: `~/.config/dockhand/config.toml`. A missing or malformed
//! file never stops startup; it degrades to defaults with a logged
//! warning.

pub mod settings;

pub use settings::{config_path, load_settings, load_settings_from, Settings};
