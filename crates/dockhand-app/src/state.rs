//! Application state - the Model in TEA
//!
//! One `AppState` owns everything the renderer reads: the active view, the
//! fetched resource lists, per-view selection cursors, the transient status
//! line, and the log session overlay when one is open. The update loop is
//! the only writer.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::session::LogSession;
use dockhand_client::{
    ContainerDetails, ContainerStats, ContainerSummary, ImageSummary, NetworkSummary, SystemInfo,
    VersionInfo, VolumeSummary,
};

// ─────────────────────────────────────────────────────────────────────────────
// View
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level screens, cycled with Tab/BackTab or selected with 1-5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Containers,
    Images,
    Volumes,
    Networks,
}

impl View {
    /// Tab order
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Containers,
        View::Images,
        View::Volumes,
        View::Networks,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Containers => "Containers",
            View::Images => "Images",
            View::Volumes => "Volumes",
            View::Networks => "Networks",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(&self) -> View {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> View {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// View for a number key, 1-based to match the key hints
    pub fn from_digit(digit: char) -> Option<View> {
        let index = digit.to_digit(10)? as usize;
        Self::ALL.get(index.checked_sub(1)?).copied()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StatusMessage
// ─────────────────────────────────────────────────────────────────────────────

/// Transient status line shown below the action views.
///
/// Auto-cleared on the first tick after `expires_at`; a new message simply
/// replaces the old one.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub error: bool,
    pub expires_at: Instant,
}

impl StatusMessage {
    /// How long a message stays up before a tick clears it
    pub const TTL: Duration = Duration::from_secs(2);

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: false,
            expires_at: Instant::now() + Self::TTL,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: true,
            expires_at: Instant::now() + Self::TTL,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Active top-level view
    pub view: View,
    /// Set when the event loop should exit after the current iteration
    pub should_quit: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Include stopped containers in the container list
    pub all_containers: bool,
    /// Loaded configuration
    pub settings: Settings,

    /// Last daemon-unreachable error, shown as a banner until a load succeeds
    pub connection_error: Option<String>,

    // ─── Fetched resource lists ───
    pub containers: Vec<ContainerSummary>,
    pub images: Vec<ImageSummary>,
    pub volumes: Vec<VolumeSummary>,
    pub networks: Vec<NetworkSummary>,
    pub system: Option<SystemInfo>,
    pub version: Option<VersionInfo>,
    /// Latest one-shot stats sample per container id
    pub stats: HashMap<String, ContainerStats>,
    /// Inspect result for the details pane, `None` when closed
    pub details: Option<ContainerDetails>,

    // ─── Per-view selection cursors ───
    pub container_cursor: usize,
    pub image_cursor: usize,
    pub volume_cursor: usize,
    pub network_cursor: usize,

    /// Transient status line
    pub status: Option<StatusMessage>,
    /// Active log viewing session; overlays the current view while set
    pub logs: Option<LogSession>,
    /// Session opened from `dockhand logs <container>`; closing it quits
    pub standalone_logs: bool,
    /// When stats were last sampled for the selected container
    pub last_stats_sample: Option<Instant>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            view: View::default(),
            should_quit: false,
            show_help: false,
            all_containers: settings.all_containers,
            settings,
            connection_error: None,
            containers: Vec::new(),
            images: Vec::new(),
            volumes: Vec::new(),
            networks: Vec::new(),
            system: None,
            version: None,
            stats: HashMap::new(),
            details: None,
            container_cursor: 0,
            image_cursor: 0,
            volume_cursor: 0,
            network_cursor: 0,
            status: None,
            logs: None,
            standalone_logs: false,
            last_stats_sample: None,
        }
    }

    /// Number of selectable rows in the active view
    pub fn view_len(&self) -> usize {
        match self.view {
            View::Dashboard => 0,
            View::Containers => self.containers.len(),
            View::Images => self.images.len(),
            View::Volumes => self.volumes.len(),
            View::Networks => self.networks.len(),
        }
    }

    /// Selection cursor of the active view
    pub fn cursor(&self) -> usize {
        match self.view {
            View::Dashboard => 0,
            View::Containers => self.container_cursor,
            View::Images => self.image_cursor,
            View::Volumes => self.volume_cursor,
            View::Networks => self.network_cursor,
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.view {
            View::Dashboard => None,
            View::Containers => Some(&mut self.container_cursor),
            View::Images => Some(&mut self.image_cursor),
            View::Volumes => Some(&mut self.volume_cursor),
            View::Networks => Some(&mut self.network_cursor),
        }
    }

    pub fn select_next(&mut self) {
        let len = self.view_len();
        if let Some(cursor) = self.cursor_mut() {
            if len > 0 && *cursor + 1 < len {
                *cursor += 1;
            }
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(cursor) = self.cursor_mut() {
            *cursor = cursor.saturating_sub(1);
        }
    }

    pub fn select_first(&mut self) {
        if let Some(cursor) = self.cursor_mut() {
            *cursor = 0;
        }
    }

    pub fn select_last(&mut self) {
        let len = self.view_len();
        if let Some(cursor) = self.cursor_mut() {
            *cursor = len.saturating_sub(1);
        }
    }

    /// Pull every cursor back inside its list after a reload shrank it
    pub fn clamp_cursors(&mut self) {
        self.container_cursor = self
            .container_cursor
            .min(self.containers.len().saturating_sub(1));
        self.image_cursor = self.image_cursor.min(self.images.len().saturating_sub(1));
        self.volume_cursor = self.volume_cursor.min(self.volumes.len().saturating_sub(1));
        self.network_cursor = self
            .network_cursor
            .min(self.networks.len().saturating_sub(1));
    }

    pub fn selected_container(&self) -> Option<&ContainerSummary> {
        self.containers.get(self.container_cursor)
    }

    pub fn selected_image(&self) -> Option<&ImageSummary> {
        self.images.get(self.image_cursor)
    }

    pub fn selected_volume(&self) -> Option<&VolumeSummary> {
        self.volumes.get(self.volume_cursor)
    }

    pub fn selected_network(&self) -> Option<&NetworkSummary> {
        self.networks.get(self.network_cursor)
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    /// Drop the status line once its deadline passes
    pub fn expire_status(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| s.is_expired(now)) {
            self.status = None;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
