//! Settings parser for ~/.config/dockhand/config.toml

use dockhand_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "dockhand";
const CONFIG_FILENAME: &str = "config.toml";

/// Application settings (~/.config/dockhand/config.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Engine socket path override. None means the standard socket
    /// (or `DOCKER_HOST` when set).
    #[serde(default)]
    pub socket_path: Option<String>,

    /// Lines of history requested when a log session opens
    #[serde(default = "default_log_tail")]
    pub log_tail: u32,

    /// In-memory cap on retained log lines per session
    #[serde(default = "default_log_buffer_capacity")]
    pub log_buffer_capacity: usize,

    /// Milliseconds between stat samples for the selected container
    #[serde(default = "default_stats_interval_ms")]
    pub stats_interval_ms: u64,

    /// Show stopped containers in the container list on startup
    #[serde(default)]
    pub all_containers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            socket_path: None,
            log_tail: default_log_tail(),
            log_buffer_capacity: default_log_buffer_capacity(),
            stats_interval_ms: default_stats_interval_ms(),
            all_containers: false,
        }
    }
}

fn default_log_tail() -> u32 {
    500
}

fn default_log_buffer_capacity() -> usize {
    500
}

fn default_stats_interval_ms() -> u64 {
    2000
}

/// Standard config file location, `~/.config/dockhand/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the standard location.
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_settings() -> Settings {
    match config_path() {
        Some(path) => load_settings_from(&path),
        None => {
            warn!("No config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from an explicit path.
///
/// Same degradation rules as [`load_settings`]: any failure yields
/// defaults, never an error.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}
