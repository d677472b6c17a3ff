//! Full-screen render tests through `view`

use super::*;
use dockhand_app::{LogSession, Settings};
use dockhand_client::{ContainerDetails, ContainerSummary};
use dockhand_core::LogRecord;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render_view(state: &mut AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| view(f, state)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|c| c.symbol())
        .collect()
}

fn state_with_containers() -> AppState {
    let mut state = AppState::new(Settings::default());
    state.view = View::Containers;
    state.containers = vec![ContainerSummary {
        id: "abc123def456".to_string(),
        names: vec!["/web".to_string()],
        image: "nginx:latest".to_string(),
        state: "running".to_string(),
        status: "Up 2 hours".to_string(),
        ..Default::default()
    }];
    state
}

#[test]
fn test_view_dashboard_has_tabs_and_help() {
    let mut state = AppState::new(Settings::default());

    let content = render_view(&mut state, 120, 30);
    assert!(content.contains("dockhand"));
    assert!(content.contains("1:Dashboard"));
    assert!(content.contains("quit"));
}

#[test]
fn test_view_containers_table() {
    let mut state = state_with_containers();

    let content = render_view(&mut state, 140, 30);
    assert!(content.contains("Containers (1)"));
    assert!(content.contains("web"));
    assert!(content.contains("running"));
}

#[test]
fn test_view_log_session_replaces_content() {
    let mut state = state_with_containers();
    let mut session = LogSession::new("abc123def456", "web", 500);
    session.append_records(vec![
        LogRecord::from_text("starting server"),
        LogRecord::from_text("listening on :80"),
    ]);
    state.logs = Some(session);

    let content = render_view(&mut state, 120, 30);
    assert!(content.contains("Logs: web"));
    assert!(content.contains("listening on :80"));
    assert!(!content.contains("Containers (1)"));
}

#[test]
fn test_view_search_entry_overlay() {
    let mut state = state_with_containers();
    let mut session = LogSession::new("abc", "web", 500);
    session.append_records(vec![LogRecord::from_text("hello")]);
    session.begin_search();
    session.push_input('e');
    session.push_input('r');
    state.logs = Some(session);

    let content = render_view(&mut state, 120, 30);
    assert!(content.contains("/er_"));
}

#[test]
fn test_view_open_error_panel() {
    let mut state = AppState::new(Settings::default());
    let mut session = LogSession::new("nope", "nope", 500);
    session.mark_open_failed("no such container: nope");
    state.logs = Some(session);

    let content = render_view(&mut state, 120, 30);
    assert!(content.contains("Failed to open log stream"));
    assert!(content.contains("no such container: nope"));
}

#[test]
fn test_view_details_popup_overlays_table() {
    let mut state = state_with_containers();
    state.details = Some(ContainerDetails {
        id: "abc123def456".to_string(),
        name: "/web".to_string(),
        ..Default::default()
    });

    let content = render_view(&mut state, 120, 36);
    assert!(content.contains("Inspect: web"));
}

#[test]
fn test_view_help_overlay_on_top() {
    let mut state = state_with_containers();
    state.show_help = true;

    let content = render_view(&mut state, 120, 30);
    assert!(content.contains("Help"));
    assert!(content.contains("restart"));
}

#[test]
fn test_view_updates_log_viewport_dimensions() {
    let mut state = AppState::new(Settings::default());
    let mut session = LogSession::new("abc", "web", 500);
    session.append_records((0..100).map(|i| LogRecord::from_text(format!("line {i}"))).collect());
    state.logs = Some(session);

    render_view(&mut state, 120, 30);

    let session = state.logs.as_ref().unwrap();
    assert_eq!(session.view.total_lines, 100);
    // Screen height minus tab bar, status, help and the view borders
    assert_eq!(session.view.visible_lines, 25);
}
