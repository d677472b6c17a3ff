//! One interactive log viewing session
//!
//! `LogSession` ties the stream reader, the capped buffer, the search state
//! and the viewport together. The reader task keeps delivering records for
//! the whole life of the session; pausing freezes the viewport, never the
//! decoding, so nothing that arrived while paused is lost.

use tokio::sync::watch;
use tracing::debug;

use crate::log_view_state::LogViewState;
use dockhand_core::{LogBuffer, LogRecord, SearchState};

/// Input focus of the log viewer.
///
/// `Filtered` is `Normal` with an active pattern; `SearchEntry` overlays
/// either while a pattern is being composed. Derived from session state
/// rather than stored, so the three can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Normal,
    SearchEntry,
    Filtered,
}

/// State for one container's log viewer
#[derive(Debug)]
pub struct LogSession {
    /// Container the stream was opened for (id or name, as requested)
    pub container_id: String,
    /// Name shown in the title bar
    pub container_name: String,
    /// Decoded lines, oldest first, capped
    pub buffer: LogBuffer,
    /// Active pattern, matches and navigation cursor
    pub search: SearchState,
    /// Scroll position and follow flag
    pub view: LogViewState,
    /// Viewport frozen; decoding and buffering continue underneath
    pub paused: bool,
    /// The stream finished (end of stream or read error); no further
    /// records will arrive but the buffer stays fully browsable
    pub done: bool,
    /// Error that ended the stream early, shown in the status bar
    pub stream_error: Option<String>,
    /// The stream never opened; the session renders an error panel and
    /// the only transition left is closing it
    pub open_error: Option<String>,
    /// Search input line visible and focused
    entering_search: bool,
    /// Pending pattern text while composing
    pub pending_input: String,
    /// Cancels the reader task; dropping the sender has the same effect
    cancel_tx: Option<watch::Sender<bool>>,
}

impl LogSession {
    pub fn new(
        container_id: impl Into<String>,
        container_name: impl Into<String>,
        capacity: usize,
    ) -> Self {
        Self {
            container_id: container_id.into(),
            container_name: container_name.into(),
            buffer: LogBuffer::with_capacity(capacity),
            search: SearchState::new(),
            view: LogViewState::new(),
            paused: false,
            done: false,
            stream_error: None,
            open_error: None,
            entering_search: false,
            pending_input: String::new(),
            cancel_tx: None,
        }
    }

    pub fn mode(&self) -> LogMode {
        if self.entering_search {
            LogMode::SearchEntry
        } else if self.search.is_active() {
            LogMode::Filtered
        } else {
            LogMode::Normal
        }
    }

    /// Lines in the view the user is looking at
    pub fn active_len(&self) -> usize {
        if self.search.is_active() {
            self.search.match_count()
        } else {
            self.buffer.len()
        }
    }

    // ─────────────────────────────────────────────────────────────────
    // Stream lifecycle
    // ─────────────────────────────────────────────────────────────────

    pub fn attach_cancel(&mut self, cancel_tx: watch::Sender<bool>) {
        self.cancel_tx = Some(cancel_tx);
    }

    /// Tell the reader task to stop. Safe to call on any exit path,
    /// including after the stream already ended.
    pub fn cancel_stream(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(true);
            debug!(container = %self.container_name, "log stream cancelled");
        }
    }

    /// Append a decoded batch and bring the viewport up to date.
    ///
    /// Runs in every state: paused and search entry only change what the
    /// viewport does with the new lines, never whether they are kept.
    pub fn append_records(&mut self, records: Vec<LogRecord>) {
        if records.is_empty() {
            return;
        }
        let evicted = self.buffer.extend(records);
        if self.search.is_active() {
            self.search.recompute(&self.buffer);
        } else if evicted > 0 {
            // Eviction slides content up one index per dropped line; move
            // the offset with it so a frozen viewport keeps showing the
            // same lines for as long as they survive.
            self.view.offset = self.view.offset.saturating_sub(evicted);
        }
        self.sync_viewport();
    }

    /// The stream ran out normally
    pub fn mark_ended(&mut self) {
        self.done = true;
    }

    /// The stream broke mid-read; everything received stays browsable
    pub fn mark_failed(&mut self, error: impl Into<String>) {
        self.done = true;
        self.stream_error = Some(error.into());
    }

    /// The stream never opened
    pub fn mark_open_failed(&mut self, error: impl Into<String>) {
        self.done = true;
        self.open_error = Some(error.into());
    }

    // ─────────────────────────────────────────────────────────────────
    // Viewport
    // ─────────────────────────────────────────────────────────────────

    /// Toggle the viewport freeze. Resuming with follow still set snaps
    /// straight to the newest line.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.sync_viewport();
    }

    fn sync_viewport(&mut self) {
        let stick = self.view.follow && !self.paused;
        self.view
            .update_content_size(self.active_len(), self.view.visible_lines, stick);
    }

    /// Buffer-coordinate index of the line at the top of the viewport
    fn top_buffer_line(&self) -> usize {
        if self.search.is_active() {
            self.search
                .matched_lines()
                .get(self.view.offset)
                .or_else(|| self.search.matched_lines().last())
                .copied()
                .unwrap_or(0)
        } else {
            self.view.offset
        }
    }

    fn center_on_current_match(&mut self) {
        let Some(line) = self.search.current_line() else {
            return;
        };
        let position = if self.search.is_active() {
            self.search
                .matched_lines()
                .iter()
                .position(|&l| l == line)
                .unwrap_or(0)
        } else {
            line
        };
        self.view.center_on(position);
    }

    // ─────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────

    /// Open the search input, seeded empty
    pub fn begin_search(&mut self) {
        self.entering_search = true;
        self.pending_input.clear();
        self.search.last_error = None;
    }

    pub fn push_input(&mut self, c: char) {
        self.pending_input.push(c);
    }

    pub fn pop_input(&mut self) {
        self.pending_input.pop();
    }

    pub fn clear_input(&mut self) {
        self.pending_input.clear();
    }

    /// Leave search entry without touching the active filter: back to
    /// whatever state was underneath (plain or filtered).
    pub fn cancel_search(&mut self) {
        self.entering_search = false;
        self.pending_input.clear();
        self.search.last_error = None;
    }

    /// Apply the pending input.
    ///
    /// Empty input clears any existing filter. A pattern that fails to
    /// compile keeps the input line open with the error inline and leaves
    /// the previous filter running. On success the cursor moves to the
    /// first match at or after the line that was at the top of the
    /// viewport, centered.
    pub fn confirm_search(&mut self) {
        let query = self.pending_input.clone();
        if query.is_empty() {
            self.entering_search = false;
            self.clear_filter();
            return;
        }

        let anchor = self.top_buffer_line();
        if self.search.set_pattern(&query, &self.buffer).is_err() {
            // Stay composing; search.last_error carries the message
            return;
        }
        self.entering_search = false;
        self.pending_input.clear();
        self.view.total_lines = self.active_len();
        self.search.seek(anchor);
        self.center_on_current_match();
        self.view.clamp();
    }

    /// Drop the filter and restore the full buffer, keeping the viewport
    /// on the line it was showing (clamped to the full buffer's bounds).
    pub fn clear_filter(&mut self) {
        if !self.search.is_active() {
            return;
        }
        let anchor = self.top_buffer_line();
        self.search.clear();
        self.view.total_lines = self.buffer.len();
        self.view.offset = anchor;
        self.view.clamp();
    }

    /// Jump to the next matching line, wrapping. No-op without a pattern.
    pub fn next_match(&mut self) {
        if !self.search.has_matches() {
            return;
        }
        self.search.next_match();
        self.center_on_current_match();
    }

    /// Jump to the previous matching line, wrapping. No-op without a pattern.
    pub fn previous_match(&mut self) {
        if !self.search.has_matches() {
            return;
        }
        self.search.prev_match();
        self.center_on_current_match();
    }

    // ─────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────

    /// Status bar text: position, pause/follow flags, match count
    pub fn status_line(&self) -> String {
        let total = self.active_len();
        let top = if total == 0 {
            0
        } else {
            self.view.offset.min(total - 1) + 1
        };
        let mut parts = vec![format!("Lines: {top}/{total}")];
        if self.paused {
            parts.push("[PAUSED]".to_string());
        }
        if self.view.follow {
            parts.push("[FOLLOW]".to_string());
        }
        if self.search.is_active() {
            parts.push(format!("Matches: {}", self.search.match_count()));
        }
        if self.stream_error.is_some() {
            parts.push("[stream error]".to_string());
        } else if self.done {
            parts.push("[ended]".to_string());
        }
        parts.join("  ")
    }

    /// Title-bar summary of the active filter
    pub fn filter_summary(&self) -> Option<String> {
        if !self.search.is_active() {
            return None;
        }
        Some(format!(
            "Filtered: {} matches for '{}' (esc to clear)",
            self.search.match_count(),
            self.search.query()
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
