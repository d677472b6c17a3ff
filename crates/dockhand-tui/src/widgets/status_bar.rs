//! Bottom status bar
//!
//! One line: connection state on the left, then either the log session's
//! position summary or the list cursor, then any transient status message.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dockhand_app::{AppState, View};
use dockhand_client::format::truncate;

use crate::theme::palette;

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Connection segment; a failed daemon call wins over everything
    fn connection_indicator(&self) -> Span<'static> {
        if let Some(error) = &self.state.connection_error {
            return Span::styled(
                format!("✗ {}", truncate(error, 48)),
                Style::default()
                    .fg(palette::STATUS_ERROR)
                    .add_modifier(Modifier::BOLD),
            );
        }
        let label = match &self.state.version {
            Some(v) => format!("● docker {}", v.version),
            None => "● docker".to_string(),
        };
        Span::styled(label, Style::default().fg(palette::STATUS_INFO))
    }

    /// Cursor position within the active list view
    fn list_position(&self) -> Option<Span<'static>> {
        let len = self.state.view_len();
        if len == 0 || self.state.view == View::Dashboard {
            return None;
        }
        Some(Span::styled(
            format!("{}/{}", self.state.cursor() + 1, len),
            Style::default().fg(palette::TEXT_MUTED),
        ))
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", Style::default().fg(palette::BORDER_DIM));

        let mut segments = Vec::new();
        segments.push(Span::raw(" "));
        segments.push(self.connection_indicator());

        if let Some(session) = &self.state.logs {
            segments.push(separator.clone());
            segments.push(Span::styled(
                session.status_line(),
                Style::default().fg(palette::TEXT_SECONDARY),
            ));
            if let Some(summary) = session.filter_summary() {
                segments.push(separator.clone());
                segments.push(Span::styled(
                    summary,
                    Style::default().fg(palette::KEY_HINT),
                ));
            }
        } else {
            if let Some(position) = self.list_position() {
                segments.push(separator.clone());
                segments.push(position);
            }
            if self.state.view == View::Containers && self.state.all_containers {
                segments.push(separator.clone());
                segments.push(Span::styled(
                    "[all]",
                    Style::default().fg(palette::TEXT_MUTED),
                ));
            }
        }

        if let Some(status) = &self.state.status {
            let style = if status.error {
                Style::default()
                    .fg(palette::STATUS_ERROR)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette::STATUS_INFO)
            };
            segments.push(separator.clone());
            segments.push(Span::styled(status.text.clone(), style));
        }

        segments.push(Span::raw(" "));
        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.build_segments())).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockhand_app::{LogSession, Settings, StatusMessage};
    use dockhand_client::VersionInfo;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &AppState, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(StatusBar::new(state), f.area()))
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
    fn test_connected_shows_engine_version() {
        let mut state = AppState::new(Settings::default());
        state.version = Some(VersionInfo {
            version: "24.0.7".to_string(),
            api_version: "1.43".to_string(),
            os: "linux".to_string(),
            arch: "amd64".to_string(),
        });

        let content = render(&state, 100);
        assert!(content.contains("● docker 24.0.7"));
    }

    #[test]
    fn test_connection_error_wins() {
        let mut state = AppState::new(Settings::default());
        state.connection_error = Some("cannot connect to the daemon".to_string());

        let content = render(&state, 100);
        assert!(content.contains("✗ cannot connect"));
        assert!(!content.contains("●"));
    }

    #[test]
    fn test_log_session_shows_position_summary() {
        let mut state = AppState::new(Settings::default());
        state.logs = Some(LogSession::new("abc", "web", 500));

        let content = render(&state, 100);
        assert!(content.contains("Lines: 0/0"));
        assert!(content.contains("[FOLLOW]"));
    }

    #[test]
    fn test_transient_status_message() {
        let mut state = AppState::new(Settings::default());
        state.set_status(StatusMessage::info("Started nginx"));

        let content = render(&state, 100);
        assert!(content.contains("Started nginx"));
    }

    #[test]
    fn test_all_containers_flag_on_containers_view() {
        let mut state = AppState::new(Settings::default());
        state.view = View::Containers;
        state.all_containers = true;

        let content = render(&state, 100);
        assert!(content.contains("[all]"));
    }
}
