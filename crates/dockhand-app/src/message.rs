//! Message types for the application (TEA pattern)

use tokio::sync::watch;

use crate::input_key::InputKey;
use crate::state::View;
use dockhand_client::{
    ContainerDetails, ContainerStats, ContainerSummary, ImageSummary, NetworkSummary, PruneReport,
    SystemInfo, VersionInfo, VolumeSummary,
};
use dockhand_core::LogRecord;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (status expiry, stats sampling)
    Tick,

    /// Terminal was resized
    Resize,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Switch directly to a view
    SwitchView(View),
    /// Cycle to the next view
    NextView,
    /// Cycle to the previous view
    PreviousView,
    /// Reload the data behind the current view
    Refresh,
    /// Move the selection down one row
    SelectNext,
    /// Move the selection up one row
    SelectPrevious,
    /// Jump the selection to the first row
    SelectFirst,
    /// Jump the selection to the last row
    SelectLast,
    /// Toggle the help overlay
    ToggleHelp,
    /// Toggle showing stopped containers in the container list
    ToggleAllContainers,

    // ─────────────────────────────────────────────────────────
    // View Data Messages
    // ─────────────────────────────────────────────────────────
    /// Container list fetch completed
    ContainersLoaded { containers: Vec<ContainerSummary> },
    /// Image list fetch completed
    ImagesLoaded { images: Vec<ImageSummary> },
    /// Volume list fetch completed
    VolumesLoaded { volumes: Vec<VolumeSummary> },
    /// Network list fetch completed
    NetworksLoaded { networks: Vec<NetworkSummary> },
    /// Daemon info + version fetch completed (dashboard tiles)
    SystemLoaded {
        info: Box<SystemInfo>,
        version: Box<VersionInfo>,
    },
    /// A list fetch failed. `unreachable` is set when the failure was at
    /// the socket level rather than an API error, so the UI can show the
    /// connection banner instead of a transient status.
    ViewLoadFailed {
        view: View,
        error: String,
        unreachable: bool,
    },
    /// One-shot stats sample arrived for a running container
    StatsSampled {
        container_id: String,
        stats: Box<ContainerStats>,
    },
    /// Container inspect completed (details pane)
    ContainerInspected { details: Box<ContainerDetails> },
    /// Close the details pane
    CloseDetails,

    // ─────────────────────────────────────────────────────────
    // Resource Action Messages
    // ─────────────────────────────────────────────────────────
    /// Start the selected container
    StartContainer { id: String, name: String },
    /// Stop the selected container
    StopContainer { id: String, name: String },
    /// Restart the selected container
    RestartContainer { id: String, name: String },
    /// Remove the selected container
    RemoveContainer { id: String, name: String },
    /// Inspect the selected container
    InspectContainer { id: String },
    /// Remove the selected image
    RemoveImage { id: String, name: String },
    /// Remove the selected volume
    RemoveVolume { name: String },
    /// Remove the selected network
    RemoveNetwork { id: String, name: String },
    /// Prune unused resources of the current view
    PruneView,
    /// A container/image/volume/network action finished
    ActionCompleted { verb: String, target: String },
    /// A container/image/volume/network action failed
    ActionFailed { action: String, error: String },
    /// A prune finished, with what the daemon reclaimed
    PruneCompleted { what: String, report: PruneReport },

    // ─────────────────────────────────────────────────────────
    // Log Session Messages
    // ─────────────────────────────────────────────────────────
    /// Open the log viewer for a container. `tail` is how much history to
    /// request; `follow` keeps the stream open for new output.
    OpenLogs {
        id: String,
        name: String,
        tail: u32,
        follow: bool,
    },
    /// Reader task is up; carries the channel that cancels it
    LogStreamAttached { cancel_tx: watch::Sender<bool> },
    /// Batch of decoded records from the reader task
    LogRecords { records: Vec<LogRecord> },
    /// The stream ended normally (container exited, non-follow tail done)
    LogStreamEnded,
    /// The stream broke mid-read; buffered lines stay browsable
    LogStreamFailed { error: String },
    /// The stream could not be opened at all; exit is the only way out
    LogStreamOpenFailed { error: String },
    /// Leave the log viewer and return to the previous view
    CloseLogs,

    // ─────────────────────────────────────────────────────────
    // Log Viewer Control Messages
    // ─────────────────────────────────────────────────────────
    /// Toggle paused (viewport freeze; decoding continues)
    TogglePause,
    /// Enter search entry mode
    StartSearch,
    /// Append a character to the pending search input
    SearchInput { c: char },
    /// Delete the last character of the pending search input
    SearchBackspace,
    /// Clear the pending search input
    SearchClearInput,
    /// Apply the pending search input as the active filter
    SearchConfirm,
    /// Leave search entry without touching the active filter
    SearchCancel,
    /// Drop the active filter and restore the full buffer
    ClearFilter,
    /// Jump to the next matching line (wraps)
    NextMatch,
    /// Jump to the previous matching line (wraps)
    PreviousMatch,

    // ─────────────────────────────────────────────────────────
    // Log Viewer Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll the log view up one line
    LogScrollUp,
    /// Scroll the log view down one line
    LogScrollDown,
    /// Page up in the log view
    LogPageUp,
    /// Page down in the log view
    LogPageDown,
    /// Jump to the oldest buffered line
    LogScrollTop,
    /// Jump to the newest line and resume following
    LogScrollBottom,
    /// Pan the log view left
    LogScrollLeft,
    /// Pan the log view right
    LogScrollRight,

    // ─────────────────────────────────────────────────────────
    // Status Messages
    // ─────────────────────────────────────────────────────────
    /// Show a transient status line in the action views
    ShowStatus { text: String, error: bool },
    /// Drop the status line (auto-fired when its deadline passes)
    ClearStatus,
}
