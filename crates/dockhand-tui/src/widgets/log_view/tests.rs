//! Tests for the log view widget

use super::*;
use dockhand_core::{LogRecord, StreamKind};
use ratatui::backend::TestBackend;
use ratatui::style::Color;
use ratatui::Terminal;

fn buffer_of(lines: &[&str]) -> LogBuffer {
    let mut buffer = LogBuffer::with_capacity(500);
    buffer.extend(lines.iter().copied().map(LogRecord::from_text));
    buffer
}

fn stderr_record(text: &str) -> LogRecord {
    LogRecord::from_payload(Some(StreamKind::Stderr), text.as_bytes()).unwrap()
}

/// Render the widget into a TestBackend and collect the buffer as a string
fn render_to_string(view: LogView, state: &mut LogViewState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| f.render_stateful_widget(view, f.area(), state))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|c| c.symbol())
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Title and line formatting
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_build_title_plain() {
    let buffer = buffer_of(&["one"]);
    let search = SearchState::new();
    let view = LogView::new(&buffer, &search).title("Logs: web");
    assert_eq!(view.build_title(), " Logs: web ");
}

#[test]
fn test_build_title_includes_match_status() {
    let buffer = buffer_of(&["alpha", "beta", "alpha again"]);
    let mut search = SearchState::new();
    search.set_pattern("alpha", &buffer).unwrap();

    let view = LogView::new(&buffer, &search).title("Logs: web");
    let title = view.build_title();
    assert!(title.contains("matches"), "got: {title}");
}

#[test]
fn test_format_line_plain_is_single_span() {
    let buffer = buffer_of(&["hello world"]);
    let search = SearchState::new();
    let widget = LogView::new(&buffer, &search);

    let view = search.active_view(&buffer);
    let line = widget.format_line(&view.lines[0]);
    assert_eq!(line.spans.len(), 1);
    assert_eq!(line.spans[0].content, "hello world");
}

#[test]
fn test_format_line_highlights_matches() {
    let buffer = buffer_of(&["one two three"]);
    let mut search = SearchState::new();
    search.set_pattern("two", &buffer).unwrap();
    let widget = LogView::new(&buffer, &search);

    let view = search.active_view(&buffer);
    let line = widget.format_line(&view.lines[0]);

    assert_eq!(line.spans.len(), 3);
    assert_eq!(line.spans[1].content, "two");
    assert_eq!(line.spans[1].style.bg, Some(palette::SEARCH_HIGHLIGHT_BG));
}

#[test]
fn test_format_line_current_match_is_underlined() {
    let buffer = buffer_of(&["first hit", "second hit"]);
    let mut search = SearchState::new();
    search.set_pattern("hit", &buffer).unwrap();
    search.seek(1);
    let widget = LogView::new(&buffer, &search);

    let view = search.active_view(&buffer);
    let focused = widget.format_line(&view.lines[1]);
    let other = widget.format_line(&view.lines[0]);

    assert_eq!(focused.spans[1].style.bg, Some(palette::SEARCH_CURRENT_BG));
    assert!(focused.spans[1]
        .style
        .add_modifier
        .contains(Modifier::UNDERLINED));
    assert_eq!(other.spans[1].style.bg, Some(palette::SEARCH_HIGHLIGHT_BG));
}

#[test]
fn test_format_line_tints_stderr() {
    let mut buffer = LogBuffer::with_capacity(10);
    buffer.append(stderr_record("boom"));
    let search = SearchState::new();
    let widget = LogView::new(&buffer, &search);

    let view = search.active_view(&buffer);
    let line = widget.format_line(&view.lines[0]);
    assert_eq!(line.spans[0].style.fg, Some(palette::LOG_STDERR));
}

// ─────────────────────────────────────────────────────────────────────────────
// Horizontal scroll
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_line_width() {
    let line = Line::from(vec![Span::raw("Hello"), Span::raw(" "), Span::raw("World")]);
    assert_eq!(LogView::line_width(&line), 11);
}

#[test]
fn test_apply_horizontal_scroll_no_scroll_needed() {
    let line = Line::from("Short line");
    let result = LogView::apply_horizontal_scroll(line, 0, 80);
    let content: String = result.spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(content, "Short line");
}

#[test]
fn test_apply_horizontal_scroll_truncate_right() {
    let line = Line::from("A very long line that exceeds visible width");
    let result = LogView::apply_horizontal_scroll(line, 0, 20);
    let content: String = result.spans.iter().map(|s| s.content.as_ref()).collect();

    assert!(content.ends_with('→'), "got: {content}");
    assert_eq!(content.chars().count(), 20);
}

#[test]
fn test_apply_horizontal_scroll_with_offset() {
    let line = Line::from("A very long line that exceeds visible width");
    let result = LogView::apply_horizontal_scroll(line, 10, 20);
    let content: String = result.spans.iter().map(|s| s.content.as_ref()).collect();

    assert!(content.starts_with('←'), "got: {content}");
    assert!(content.ends_with('→'), "got: {content}");
    assert_eq!(content.chars().count(), 20);
}

#[test]
fn test_apply_horizontal_scroll_at_end() {
    let line = Line::from("A very long line");
    let result = LogView::apply_horizontal_scroll(line, 6, 20);
    let content: String = result.spans.iter().map(|s| s.content.as_ref()).collect();

    assert!(content.starts_with('←'), "got: {content}");
    assert!(!content.ends_with('→'), "got: {content}");
}

#[test]
fn test_apply_horizontal_scroll_offset_beyond_content() {
    let line = Line::from("Short");
    let result = LogView::apply_horizontal_scroll(line, 100, 20);
    let content: String = result.spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(content, "");
}

#[test]
fn test_apply_horizontal_scroll_preserves_styles() {
    let line = Line::from(vec![
        Span::styled("Red", Style::default().fg(Color::Red)),
        Span::styled("Blue", Style::default().fg(Color::Blue)),
    ]);
    let result = LogView::apply_horizontal_scroll(line, 1, 3);

    // One char of each span survives the slice, styles intact
    let styled: Vec<(String, Option<Color>)> = result
        .spans
        .iter()
        .map(|s| (s.content.to_string(), s.style.fg))
        .collect();
    assert!(styled.iter().any(|(_, fg)| *fg == Some(Color::Red)));
    assert!(styled.iter().any(|(_, fg)| *fg == Some(Color::Blue)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_render_waiting_placeholder_when_empty() {
    let buffer = LogBuffer::with_capacity(10);
    let search = SearchState::new();
    let view = LogView::new(&buffer, &search).title("Logs: web");
    let mut state = LogViewState::new();

    let content = render_to_string(view, &mut state, 60, 10);
    assert!(content.contains("Waiting for output"));
    assert!(content.contains("Logs: web"));
}

#[test]
fn test_render_no_output_when_stream_done_and_empty() {
    let buffer = LogBuffer::with_capacity(10);
    let search = SearchState::new();
    let view = LogView::new(&buffer, &search).stream_done(true);
    let mut state = LogViewState::new();

    let content = render_to_string(view, &mut state, 60, 10);
    assert!(content.contains("No output"));
    assert!(!content.contains("Waiting"));
}

#[test]
fn test_render_sticks_to_newest_line() {
    let lines: Vec<String> = (0..30).map(|i| format!("line {i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let buffer = buffer_of(&refs);
    let search = SearchState::new();
    let view = LogView::new(&buffer, &search).stick_to_bottom(true);
    let mut state = LogViewState::new();

    let content = render_to_string(view, &mut state, 40, 10);
    assert!(content.contains("line 29"));
    assert!(!content.contains("line 0 "));
}

#[test]
fn test_render_frozen_offset_shows_oldest() {
    let lines: Vec<String> = (0..30).map(|i| format!("line {i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let buffer = buffer_of(&refs);
    let search = SearchState::new();
    let view = LogView::new(&buffer, &search).stick_to_bottom(false);
    let mut state = LogViewState::new();

    let content = render_to_string(view, &mut state, 40, 10);
    assert!(content.contains("line 0"));
    assert!(!content.contains("line 29"));
}

#[test]
fn test_render_filtered_view_shows_only_matches() {
    let buffer = buffer_of(&["alpha one", "beta two", "alpha three", "beta four"]);
    let mut search = SearchState::new();
    search.set_pattern("beta", &buffer).unwrap();
    let view = LogView::new(&buffer, &search);
    let mut state = LogViewState::new();

    let content = render_to_string(view, &mut state, 40, 10);
    assert!(content.contains("beta two"));
    assert!(content.contains("beta four"));
    assert!(!content.contains("alpha"));
}

#[test]
fn test_render_no_match_placeholder() {
    let buffer = buffer_of(&["alpha", "beta"]);
    let mut search = SearchState::new();
    search.set_pattern("zzz", &buffer).unwrap();
    let view = LogView::new(&buffer, &search);
    let mut state = LogViewState::new();

    let content = render_to_string(view, &mut state, 60, 10);
    assert!(content.contains("No matches found for 'zzz'"));
    assert!(content.contains("Esc clears the filter"));
}

#[test]
fn test_render_scrollbar_when_content_overflows() {
    let lines: Vec<String> = (0..50).map(|i| format!("line {i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let buffer = buffer_of(&refs);
    let search = SearchState::new();
    let view = LogView::new(&buffer, &search);
    let mut state = LogViewState::new();

    let content = render_to_string(view, &mut state, 40, 10);
    assert!(content.contains('▲'));
    assert!(content.contains('▼'));
}

#[test]
fn test_render_feeds_dimensions_back_into_state() {
    let lines: Vec<String> = (0..50).map(|i| format!("line {i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let buffer = buffer_of(&refs);
    let search = SearchState::new();
    let view = LogView::new(&buffer, &search);
    let mut state = LogViewState::new();

    render_to_string(view, &mut state, 40, 12);

    assert_eq!(state.total_lines, 50);
    assert_eq!(state.visible_lines, 10, "inner height excludes borders");
    assert_eq!(state.visible_width, 38);
}

#[test]
fn test_render_horizontal_pan_shows_left_indicator() {
    let long = "x".repeat(120);
    let buffer = buffer_of(&[long.as_str()]);
    let search = SearchState::new();
    let view = LogView::new(&buffer, &search);
    let mut state = LogViewState::new();
    state.h_offset = 10;

    let content = render_to_string(view, &mut state, 40, 6);
    assert!(content.contains('←'));
    assert!(content.contains('→'));
}
