//! Log viewport state - scroll position and follow tracking
//!
//! Used by the handler layer for scroll commands and by the TUI layer for
//! rendering. Offsets are line indices into the active view (the full
//! buffer, or the matching lines while a filter is set); the renderer
//! feeds back the real dimensions each frame.

/// Scroll state for the log view
#[derive(Debug)]
pub struct LogViewState {
    /// Vertical scroll offset from the top of the active view
    pub offset: usize,
    /// Horizontal pan offset from the left, in columns
    pub h_offset: usize,
    /// Whether the viewport sticks to the newest line
    pub follow: bool,
    /// Lines in the active view (set on append and during render)
    pub total_lines: usize,
    /// Viewport height in lines (set during render)
    pub visible_lines: usize,
    /// Widest line in the current view, for pan bounds
    pub max_line_width: usize,
    /// Viewport width in columns (set during render)
    pub visible_width: usize,
}

impl Default for LogViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl LogViewState {
    /// Follow starts on: a fresh session tails the newest output.
    pub fn new() -> Self {
        Self {
            offset: 0,
            h_offset: 0,
            follow: true,
            total_lines: 0,
            visible_lines: 0,
            max_line_width: 0,
            visible_width: 0,
        }
    }

    /// Largest offset that still fills the viewport
    pub fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Whether the newest line is inside the viewport
    pub fn at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Range of line indices to render, end exclusive
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset.min(self.total_lines);
        let end = (self.offset + self.visible_lines).min(self.total_lines);
        (start, end)
    }

    /// Scroll up by n lines; any upward movement releases follow
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
        self.follow = false;
    }

    /// Scroll down by n lines; reaching the newest line re-enables follow
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
        if self.at_bottom() {
            self.follow = true;
        }
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.follow = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.follow = true;
    }

    /// Put the given view line in the middle of the viewport (match jumps)
    pub fn center_on(&mut self, index: usize) {
        self.offset = index.saturating_sub(self.visible_lines / 2);
        self.follow = false;
        self.clamp();
    }

    /// Pull the offset back inside the current bounds
    pub fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update vertical dimensions; `stick_to_bottom` pins the newest line.
    ///
    /// The caller decides stickiness because it depends on more than the
    /// follow flag: a paused session follows nothing even while the flag
    /// stays set.
    pub fn update_content_size(&mut self, total: usize, visible: usize, stick_to_bottom: bool) {
        self.total_lines = total;
        self.visible_lines = visible;
        if stick_to_bottom {
            self.offset = self.max_offset();
        }
        self.clamp();
    }

    /// Pan left by n columns
    pub fn scroll_left(&mut self, n: usize) {
        self.h_offset = self.h_offset.saturating_sub(n);
    }

    /// Pan right by n columns
    pub fn scroll_right(&mut self, n: usize) {
        let max_h_offset = self.max_line_width.saturating_sub(self.visible_width);
        self.h_offset = (self.h_offset + n).min(max_h_offset);
    }

    /// Update horizontal dimensions, clamping the pan if content shrank
    pub fn update_horizontal_size(&mut self, max_width: usize, visible_width: usize) {
        self.max_line_width = max_width;
        self.visible_width = visible_width;
        let max_h_offset = max_width.saturating_sub(visible_width);
        if self.h_offset > max_h_offset {
            self.h_offset = max_h_offset;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(total: usize, visible: usize) -> LogViewState {
        let mut state = LogViewState::new();
        state.update_content_size(total, visible, true);
        state
    }

    #[test]
    fn test_new_state_follows() {
        let state = LogViewState::new();
        assert!(state.follow);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_scroll_up_releases_follow() {
        let mut state = sized(100, 10);
        assert_eq!(state.offset, 90);
        assert!(state.follow);

        state.scroll_up(1);
        assert_eq!(state.offset, 89);
        assert!(!state.follow, "manual scroll up releases follow");
    }

    #[test]
    fn test_scroll_down_to_newest_line_resumes_follow() {
        let mut state = sized(100, 10);
        state.scroll_up(5);
        assert!(!state.follow);

        state.scroll_down(4);
        assert!(!state.follow, "still above the newest line");

        state.scroll_down(1);
        assert!(state.follow, "reaching the newest line re-enables follow");
    }

    #[test]
    fn test_scroll_clamps_at_both_ends() {
        let mut state = sized(20, 10);
        state.scroll_up(100);
        assert_eq!(state.offset, 0);

        state.scroll_down(500);
        assert_eq!(state.offset, 10);
    }

    #[test]
    fn test_page_movement_overlaps_by_two_lines() {
        let mut state = sized(100, 10);
        state.scroll_to_top();
        state.page_down();
        assert_eq!(state.offset, 8);
        state.page_up();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_page_moves_even_before_first_render() {
        let mut state = LogViewState::new();
        state.total_lines = 50;
        state.offset = 10;
        // visible_lines still 0
        state.page_up();
        assert_eq!(state.offset, 9);
    }

    #[test]
    fn test_top_and_bottom_jumps() {
        let mut state = sized(100, 10);
        state.scroll_to_top();
        assert_eq!(state.offset, 0);
        assert!(!state.follow);

        state.scroll_to_bottom();
        assert_eq!(state.offset, 90);
        assert!(state.follow);
    }

    #[test]
    fn test_update_content_size_sticky_pins_bottom() {
        let mut state = sized(100, 10);
        state.update_content_size(150, 10, true);
        assert_eq!(state.offset, 140);
    }

    #[test]
    fn test_update_content_size_unsticky_freezes_offset() {
        let mut state = sized(100, 10);
        state.scroll_up(50);
        let frozen = state.offset;

        state.update_content_size(150, 10, false);
        assert_eq!(state.offset, frozen, "viewport does not advance");
    }

    #[test]
    fn test_update_content_size_clamps_after_shrink() {
        let mut state = sized(100, 10);
        state.update_content_size(5, 10, false);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_center_on_puts_line_mid_viewport() {
        let mut state = sized(100, 10);
        state.center_on(50);
        assert_eq!(state.offset, 45);
        assert!(!state.follow);

        state.center_on(2);
        assert_eq!(state.offset, 0, "centering near the top clamps to 0");

        state.center_on(99);
        assert_eq!(state.offset, 90, "centering near the end clamps to max");
    }

    #[test]
    fn test_visible_range() {
        let mut state = sized(100, 10);
        state.offset = 20;
        assert_eq!(state.visible_range(), (20, 30));

        state.update_content_size(25, 10, false);
        assert_eq!(state.visible_range(), (15, 25));
    }

    #[test]
    fn test_horizontal_pan_bounds() {
        let mut state = sized(10, 5);
        state.update_horizontal_size(120, 80);

        state.scroll_right(50);
        assert_eq!(state.h_offset, 40, "pan stops at the widest line");

        state.scroll_left(15);
        assert_eq!(state.h_offset, 25);
        state.scroll_left(100);
        assert_eq!(state.h_offset, 0);
    }

    #[test]
    fn test_horizontal_resize_clamps_pan() {
        let mut state = sized(10, 5);
        state.update_horizontal_size(120, 80);
        state.scroll_right(40);
        assert_eq!(state.h_offset, 40);

        // Lines got shorter; pan must come back inside
        state.update_horizontal_size(90, 80);
        assert_eq!(state.h_offset, 10);
    }
}
