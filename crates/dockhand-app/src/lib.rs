//! dockhand-app - Application state and orchestration for Dockhand
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: messages describe everything that can happen, `handler::update`
//! is the only place state mutates, and side effects leave through actions
//! executed on the runtime. Also home to the log session (buffer, search,
//! scroll), the declarative keymap and configuration loading.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod keymap;
pub mod log_view_state;
pub mod message;
pub mod process;
pub mod session;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::{load_settings, Settings};
pub use handler::{Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use log_view_state::LogViewState;
pub use message::Message;
pub use process::process_message;
pub use session::{LogMode, LogSession};
pub use state::{AppState, StatusMessage, View};

// Re-export client types for the TUI
pub use dockhand_client::{
    ContainerDetails, ContainerStats, ContainerSummary, ImageSummary, NetworkSummary, SystemInfo,
    VersionInfo, VolumeSummary,
};
