//! dockhand-tui - Terminal UI for Dockhand
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! TEA loop from dockhand-app and adds terminal setup, event polling, and
//! the widget layer: resource tables, the dashboard, and the log viewer.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry points
pub use runner::{run_dashboard, run_log_viewer};
