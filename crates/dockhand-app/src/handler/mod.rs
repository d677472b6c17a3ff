//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event translation per input scope
//! - `views`: List view loads, container/image/volume/network actions
//! - `log_view`: Log session lifecycle, search, scroll, pause

pub(crate) mod keys;
pub(crate) mod log_view;
pub(crate) mod update;
pub(crate) mod views;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Spawn a one-shot background task against the Engine API
    SpawnTask(Task),

    /// Open a streaming log session for a container.
    ///
    /// Separate from [`Task`] because the reader outlives a single
    /// request: the loop must hand its cancel handle back via
    /// `Message::LogStreamAttached`.
    OpenLogStream {
        id: String,
        name: String,
        tail: u32,
        follow: bool,
    },
}

/// One-shot background tasks to spawn
#[derive(Debug, Clone)]
pub enum Task {
    /// List containers (all includes stopped ones)
    ListContainers { all: bool },
    /// List images
    ListImages,
    /// List volumes
    ListVolumes,
    /// List networks
    ListNetworks,
    /// Fetch daemon info + version for the dashboard
    LoadSystem,
    /// Inspect one container for the details pane
    InspectContainer { id: String },
    /// One-shot stats sample for the selected running container
    SampleStats { id: String },
    StartContainer { id: String, name: String },
    StopContainer { id: String, name: String },
    RestartContainer { id: String, name: String },
    RemoveContainer { id: String, name: String },
    RemoveImage { id: String, name: String },
    RemoveVolume { name: String },
    RemoveNetwork { id: String, name: String },
    PruneContainers,
    PruneImages,
    PruneVolumes,
    PruneNetworks,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
