//! Search input prompt widget
//!
//! Rendered as a single line over the bottom of the log view while a
//! pattern is being composed. The pattern only takes effect on Enter, so
//! the prompt shows the pending text, not the active filter.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dockhand_core::SearchState;

use crate::theme::palette;

/// Search input prompt widget
pub struct SearchInput<'a> {
    /// Pattern text being composed
    pending: &'a str,
    /// Search state, for surfacing a failed compile from the last confirm
    search: &'a SearchState,
}

impl<'a> SearchInput<'a> {
    pub fn new(pending: &'a str, search: &'a SearchState) -> Self {
        Self { pending, search }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Format: "/query_" plus "(error)" when the last confirm failed
        let mut spans = vec![
            Span::styled(
                "/",
                Style::default()
                    .fg(palette::KEY_HINT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                self.pending.to_string(),
                Style::default().fg(palette::TEXT_PRIMARY),
            ),
            Span::styled("_", Style::default().fg(palette::KEY_HINT)),
        ];

        if let Some(error) = &self.search.last_error {
            let short = if error.chars().count() > 40 {
                let cut: String = error.chars().take(37).collect();
                format!("{cut}...")
            } else {
                error.clone()
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("({short})"),
                Style::default().fg(palette::STATUS_ERROR),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(widget: SearchInput, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(widget, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_pending_text_with_cursor() {
        let search = SearchState::new();
        let content = render(SearchInput::new("err", &search), 30);
        assert!(content.starts_with("/err_"));
    }

    #[test]
    fn test_empty_pending_shows_bare_prompt() {
        let search = SearchState::new();
        let content = render(SearchInput::new("", &search), 30);
        assert!(content.starts_with("/_"));
    }

    #[test]
    fn test_shows_compile_error_from_last_confirm() {
        let mut search = SearchState::new();
        search.last_error = Some("invalid pattern".to_string());
        let content = render(SearchInput::new("[bad", &search), 60);
        assert!(content.contains("(invalid pattern)"));
    }

    #[test]
    fn test_long_error_is_truncated() {
        let mut search = SearchState::new();
        search.last_error = Some("x".repeat(80));
        let content = render(SearchInput::new("q", &search), 80);
        assert!(content.contains("..."));
    }
}
