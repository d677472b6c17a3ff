//! Key hint bar and full help overlay
//!
//! Both surfaces read the same binding tables the dispatcher uses, so the
//! hints can never promise a key the handler ignores. The bar shows the
//! bindings for whatever currently has focus and drops non-essential ones
//! when the terminal is narrow.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dockhand_app::keymap::{self, KeyBinding, KeyScope};
use dockhand_app::{AppState, LogMode};

use crate::theme::{palette, styles};
use crate::widgets::overlay;

/// Binding scope for whatever has focus right now
fn active_scope(state: &AppState) -> KeyScope {
    if let Some(session) = &state.logs {
        return match session.mode() {
            LogMode::SearchEntry => KeyScope::LogSearch,
            LogMode::Filtered => KeyScope::LogFiltered,
            LogMode::Normal => KeyScope::LogNormal,
        };
    }
    KeyScope::for_view(state.view)
}

// ─────────────────────────────────────────────────────────────────────────────
// HelpBar
// ─────────────────────────────────────────────────────────────────────────────

/// Single-line key hint bar at the bottom of the screen
pub struct HelpBar<'a> {
    state: &'a AppState,
}

impl<'a> HelpBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hint_spans(bindings: &[&KeyBinding]) -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(bindings.len() * 3);
        for (i, binding) in bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(palette::BORDER_DIM)));
            }
            spans.push(Span::styled(
                binding.hint.to_string(),
                styles::key_hint().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", binding.label),
                Style::default().fg(palette::TEXT_MUTED),
            ));
        }
        spans
    }

    fn spans_width(spans: &[Span]) -> usize {
        spans.iter().map(|s| s.content.chars().count()).sum()
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // The details pane swallows everything except the keys that close it
        if self.state.details.is_some() {
            let line = Line::from(vec![
                Span::styled(" esc/enter", styles::key_hint().add_modifier(Modifier::BOLD)),
                Span::styled(" close details", Style::default().fg(palette::TEXT_MUTED)),
            ]);
            Paragraph::new(line).render(area, buf);
            return;
        }

        let scope = active_scope(self.state);
        let all: Vec<&KeyBinding> = keymap::help_bindings(scope).collect();

        let mut spans = Self::hint_spans(&all);
        if Self::spans_width(&spans) + 1 > area.width as usize {
            let essential: Vec<&KeyBinding> =
                all.into_iter().filter(|b| b.essential).collect();
            spans = Self::hint_spans(&essential);
        }

        let mut line_spans = vec![Span::raw(" ")];
        line_spans.extend(spans);
        Paragraph::new(Line::from(line_spans)).render(area, buf);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HelpOverlay
// ─────────────────────────────────────────────────────────────────────────────

/// Centered popup listing every binding for the current scope
pub struct HelpOverlay<'a> {
    state: &'a AppState,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scope = active_scope(self.state);
        let bindings: Vec<&KeyBinding> = keymap::help_bindings(scope).collect();

        let height = (bindings.len() as u16 + 4).min(area.height);
        let popup = overlay::centered_rect(46, height, area);

        overlay::dim_background(buf, area);
        overlay::clear_area(buf, popup);

        let block = styles::popup_block(" Help ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::from("")];
        for binding in bindings {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<8}", binding.hint),
                    styles::key_hint().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    binding.label.to_string(),
                    Style::default().fg(palette::TEXT_PRIMARY),
                ),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
