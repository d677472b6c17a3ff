//! Scrollable log view widget with search highlighting
//!
//! Renders the active view of a session's buffer: the full buffer, or only
//! the matching lines while a filter is set. The widget feeds the real
//! viewport dimensions back into [`LogViewState`] every frame so scroll
//! commands operate in the same coordinates the renderer used.

use dockhand_app::log_view_state::LogViewState;
use dockhand_core::{ActiveView, LogBuffer, SearchState, ViewLine};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget,
        Widget,
    },
};

use crate::theme::palette;

/// Log view widget over one session's buffer and search state
pub struct LogView<'a> {
    buffer: &'a LogBuffer,
    search: &'a SearchState,
    title: String,
    /// Pin the viewport to the newest line during this render
    stick_to_bottom: bool,
    /// Stream finished; changes the empty-state message
    stream_done: bool,
}

impl<'a> LogView<'a> {
    pub fn new(buffer: &'a LogBuffer, search: &'a SearchState) -> Self {
        Self {
            buffer,
            search,
            title: "Logs".to_string(),
            stick_to_bottom: false,
            stream_done: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn stick_to_bottom(mut self, stick: bool) -> Self {
        self.stick_to_bottom = stick;
        self
    }

    pub fn stream_done(mut self, done: bool) -> Self {
        self.stream_done = done;
        self
    }

    /// Title string including the search indicator when one applies
    fn build_title(&self) -> String {
        let status = self.search.display_status();
        if status.is_empty() {
            format!(" {} ", self.title)
        } else {
            format!(" {} {} ", self.title, status)
        }
    }

    fn base_style(line: &ViewLine) -> Style {
        if line.record.is_stderr() {
            Style::default().fg(palette::LOG_STDERR)
        } else {
            Style::default().fg(palette::LOG_TEXT)
        }
    }

    /// Format one view line, wrapping its match spans in highlight styles.
    ///
    /// Matches on the focused line get the brighter current-match style;
    /// navigation moves between lines, so every match on that line lights up.
    fn format_line(&self, line: &ViewLine) -> Line<'static> {
        let base = Self::base_style(line);
        let text = &line.record.text;

        if line.spans.is_empty() {
            return Line::from(Span::styled(text.clone(), base));
        }

        let match_style = if self.search.current_line() == Some(line.index) {
            Style::default()
                .bg(palette::SEARCH_CURRENT_BG)
                .fg(palette::SEARCH_CURRENT_FG)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
                .bg(palette::SEARCH_HIGHLIGHT_BG)
                .fg(palette::SEARCH_HIGHLIGHT_FG)
                .add_modifier(Modifier::BOLD)
        };

        let mut spans = Vec::new();
        let mut last_end = 0;
        for mat in line.spans {
            if mat.start > last_end {
                spans.push(Span::styled(text[last_end..mat.start].to_string(), base));
            }
            spans.push(Span::styled(
                text[mat.start..mat.end].to_string(),
                match_style,
            ));
            last_end = mat.end;
        }
        if last_end < text.len() {
            spans.push(Span::styled(text[last_end..].to_string(), base));
        }

        Line::from(spans)
    }

    /// Render the empty state with a centered message
    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.build_title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::BORDER_DIM));

        let inner = block.inner(area);
        block.render(area, buf);

        let message = if self.stream_done {
            "No output"
        } else {
            "Waiting for output..."
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                message,
                Style::default()
                    .fg(palette::TEXT_MUTED)
                    .add_modifier(Modifier::ITALIC),
            )),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }

    /// Render the filtered-to-nothing state
    fn render_no_matches(&self, view: &ActiveView, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.build_title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::BORDER_DIM));

        let inner = block.inner(area);
        block.render(area, buf);

        let placeholder = view
            .placeholder()
            .unwrap_or_else(|| "No matches".to_string());

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                placeholder,
                Style::default()
                    .fg(palette::KEY_HINT)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Esc clears the filter",
                Style::default().fg(palette::TEXT_MUTED),
            )),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }

    /// Display width of a line (sum of span content widths)
    fn line_width(line: &Line) -> usize {
        line.spans.iter().map(|s| s.content.chars().count()).sum()
    }

    /// Apply the horizontal pan to a line, truncating and adding edge
    /// indicators where content continues off-screen
    fn apply_horizontal_scroll(
        line: Line<'static>,
        h_offset: usize,
        visible_width: usize,
    ) -> Line<'static> {
        let line_width = Self::line_width(&line);

        if h_offset == 0 && line_width <= visible_width {
            return line;
        }

        // Flatten into (char, style) pairs so the slice can cut through
        // span boundaries
        let mut chars: Vec<(char, Style)> = Vec::with_capacity(line_width);
        for span in &line.spans {
            let style = span.style;
            for c in span.content.chars() {
                chars.push((c, style));
            }
        }

        if h_offset >= chars.len() {
            return Line::from("");
        }

        let visible_end = (h_offset + visible_width).min(chars.len());
        let has_more_left = h_offset > 0;
        let has_more_right = visible_end < chars.len();

        // Edge indicators eat into the content width
        let left_space = usize::from(has_more_left);
        let right_space = usize::from(has_more_right);
        let content_width = visible_width
            .saturating_sub(left_space)
            .saturating_sub(right_space);

        let content_start = h_offset + left_space;
        let content_end = (content_start + content_width).min(chars.len());

        let indicator_style = Style::default().fg(palette::TEXT_MUTED);
        let mut spans: Vec<Span<'static>> = Vec::new();

        if has_more_left {
            spans.push(Span::styled("←".to_string(), indicator_style));
        }

        // Regroup consecutive same-style chars back into spans
        if content_start < content_end {
            let mut current_style = chars[content_start].1;
            let mut current_text = String::new();

            for &(c, style) in &chars[content_start..content_end] {
                if style == current_style {
                    current_text.push(c);
                } else {
                    if !current_text.is_empty() {
                        spans.push(Span::styled(current_text, current_style));
                    }
                    current_text = String::from(c);
                    current_style = style;
                }
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(current_text, current_style));
            }
        }

        if has_more_right {
            spans.push(Span::styled("→".to_string(), indicator_style));
        }

        Line::from(spans)
    }
}

impl StatefulWidget for LogView<'_> {
    type State = LogViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if self.buffer.is_empty() && !self.search.is_active() {
            self.render_empty(area, buf);
            return;
        }

        let view = self.search.active_view(self.buffer);
        if view.no_matches() {
            self.render_no_matches(&view, area, buf);
            return;
        }

        let block = Block::default()
            .title(self.build_title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::BORDER_DIM));

        let inner = block.inner(area);
        block.render(area, buf);

        state.update_content_size(view.len(), inner.height as usize, self.stick_to_bottom);

        let (start, end) = state.visible_range();
        let lines: Vec<Line> = view.lines[start..end]
            .iter()
            .map(|line| self.format_line(line))
            .collect();

        let max_line_width = lines.iter().map(Self::line_width).max().unwrap_or(0);
        let visible_width = inner.width as usize;
        state.update_horizontal_size(max_line_width, visible_width);

        let scrolled: Vec<Line> = lines
            .into_iter()
            .map(|line| Self::apply_horizontal_scroll(line, state.h_offset, visible_width))
            .collect();

        Paragraph::new(scrolled).render(inner, buf);

        if view.len() > state.visible_lines {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█");

            let mut scrollbar_state = ScrollbarState::new(view.len()).position(state.offset);
            scrollbar.render(area, buf, &mut scrollbar_state);
        }
    }
}

// Non-stateful version for simple rendering
impl Widget for LogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut state = LogViewState::new();
        StatefulWidget::render(self, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests;
