//! Main render function
//!
//! Pure view of `AppState`; the only state it writes is the viewport
//! feedback inside `LogViewState`. Overlays render last so they sit on top
//! of whatever the content pane drew.

#[cfg(test)]
mod tests;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use dockhand_app::{AppState, LogMode, LogSession, View};

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::TabBar::new(state.view).logs_open(state.logs.is_some()),
        areas.tabs,
    );

    if let Some(session) = state.logs.as_mut() {
        render_log_session(frame, &areas, session);
    } else {
        render_view_content(frame, &areas, state);
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
    frame.render_widget(widgets::HelpBar::new(state), areas.help);

    if let Some(details) = &state.details {
        frame.render_widget(widgets::DetailsPanel::new(details), area);
    }

    if state.show_help {
        frame.render_widget(widgets::HelpOverlay::new(state), area);
    }
}

/// Content pane for the selected view
fn render_view_content(frame: &mut Frame, areas: &layout::ScreenAreas, state: &AppState) {
    match state.view {
        View::Dashboard => frame.render_widget(
            widgets::Dashboard::new(state.system.as_ref(), state.version.as_ref()),
            areas.content,
        ),
        View::Containers => frame.render_widget(
            widgets::ContainerTable::new(&state.containers, &state.stats, state.container_cursor)
                .all(state.all_containers),
            areas.content,
        ),
        View::Images => frame.render_widget(
            widgets::ImageTable::new(&state.images, state.image_cursor),
            areas.content,
        ),
        View::Volumes => frame.render_widget(
            widgets::VolumeTable::new(&state.volumes, state.volume_cursor),
            areas.content,
        ),
        View::Networks => frame.render_widget(
            widgets::NetworkTable::new(&state.networks, state.network_cursor),
            areas.content,
        ),
    }
}

/// Content pane while a log session is open
fn render_log_session(frame: &mut Frame, areas: &layout::ScreenAreas, session: &mut LogSession) {
    if let Some(error) = &session.open_error {
        render_open_error(frame, areas.content, &session.container_name, error);
        return;
    }

    // A paused session follows nothing, whatever the follow flag says
    let stick = session.view.follow && !session.paused;
    let log_view = widgets::LogView::new(&session.buffer, &session.search)
        .title(format!("Logs: {}", session.container_name))
        .stick_to_bottom(stick)
        .stream_done(session.done);

    frame.render_stateful_widget(log_view, areas.content, &mut session.view);

    if session.mode() == LogMode::SearchEntry {
        let search_area = Rect::new(
            areas.content.x + 1,
            areas.content.y + areas.content.height.saturating_sub(2),
            areas.content.width.saturating_sub(2),
            1,
        );
        frame.render_widget(Clear, search_area);
        frame.render_widget(
            widgets::SearchInput::new(&session.pending_input, &session.search),
            search_area,
        );
    }
}

/// The stream never opened; nothing to scroll, just the error and the way out
fn render_open_error(frame: &mut Frame, area: Rect, name: &str, error: &str) {
    let block = styles::panel_block(true).title(format!(" Logs: {name} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Failed to open log stream",
            styles::status_error(),
        )),
        Line::from(""),
        Line::from(Span::styled(error.to_string(), styles::text_secondary())),
        Line::from(""),
        Line::from(Span::styled(
            "esc/q close",
            Style::default().fg(palette::TEXT_MUTED),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
