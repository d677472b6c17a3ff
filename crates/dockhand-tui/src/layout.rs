//! Screen layout definitions for the TUI
//!
//! One fixed vertical arrangement: view tabs on top, the active view's
//! content in the middle, then the status line and the key hint bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// View tab row
    pub tabs: Rect,

    /// Active view content (table, dashboard or log viewer)
    pub content: Rect,

    /// Transient status / session position line
    pub status: Rect,

    /// Key hint bar
    pub help: Rect,
}

/// Split the screen into the four fixed rows
pub fn create(area: Rect) -> ScreenAreas {
    let constraints = [
        Constraint::Length(1), // Tabs
        Constraint::Min(3),    // Content (bordered, needs room for two border rows)
        Constraint::Length(1), // Status
        Constraint::Length(1), // Help
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        tabs: chunks[0],
        content: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard_terminal() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.tabs.height, 1);
        assert_eq!(layout.content.height, 21); // 24 - 1 - 1 - 1
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.help.height, 1);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create(area);

        assert_eq!(layout.content.y, layout.tabs.y + layout.tabs.height);
        assert_eq!(layout.status.y, layout.content.y + layout.content.height);
        assert_eq!(layout.help.y, layout.status.y + layout.status.height);
        assert_eq!(
            layout.tabs.height + layout.content.height + layout.status.height + layout.help.height,
            area.height
        );
    }

    #[test]
    fn test_content_keeps_minimum_height_when_cramped() {
        let area = Rect::new(0, 0, 80, 6);
        let layout = create(area);

        assert!(layout.content.height >= 3);
    }
}
