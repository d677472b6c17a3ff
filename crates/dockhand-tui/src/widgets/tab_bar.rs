//! Top tab bar listing the available views

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dockhand_app::View;

use crate::theme::{palette, styles};

/// Tab bar widget; one entry per view, active one highlighted
pub struct TabBar {
    active: View,
    /// A log session replaces the content pane; the bar flags it so the
    /// active tab is not misleading
    logs_open: bool,
}

impl TabBar {
    pub fn new(active: View) -> Self {
        Self {
            active,
            logs_open: false,
        }
    }

    pub fn logs_open(mut self, open: bool) -> Self {
        self.logs_open = open;
        self
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            " dockhand ",
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        )];

        for (i, view) in View::ALL.iter().enumerate() {
            let label = format!(" {}:{} ", i + 1, view.title());
            let style = if *view == self.active && !self.logs_open {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(label, style));
        }

        if self.logs_open {
            spans.push(Span::styled(" [logs] ", styles::focused_selected()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
