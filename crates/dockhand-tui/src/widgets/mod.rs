//! Custom widget components

mod dashboard;
mod details;
mod help;
mod log_view;
pub mod overlay;
mod search_input;
mod status_bar;
mod tab_bar;
mod tables;

pub use dashboard::Dashboard;
pub use details::DetailsPanel;
pub use help::{HelpBar, HelpOverlay};
pub use log_view::LogView;
pub use search_input::SearchInput;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
pub use tables::{ContainerTable, ImageTable, NetworkTable, VolumeTable};

// Re-export state types from app layer (these are used by render/)
pub use dockhand_app::log_view_state::LogViewState;
