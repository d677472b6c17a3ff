//! Log session handlers: lifecycle, search, pause, scrolling
//!
//! All session state transitions live on [`LogSession`]; these handlers
//! route messages to it and decide what the event loop does next.

use dockhand_core::LogRecord;
use tokio::sync::watch;

use crate::message::Message;
use crate::session::LogSession;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Columns panned per left/right key press
const H_SCROLL_STEP: usize = 4;

// ─────────────────────────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_open_logs(
    state: &mut AppState,
    id: String,
    name: String,
    tail: u32,
    follow: bool,
) -> UpdateResult {
    // Only one session at a time; a leftover reader must not keep feeding
    // the new buffer
    if let Some(mut old) = state.logs.take() {
        old.cancel_stream();
    }

    state.logs = Some(LogSession::new(
        id.clone(),
        name.clone(),
        state.settings.log_buffer_capacity,
    ));

    UpdateResult::action(UpdateAction::OpenLogStream {
        id,
        name,
        tail,
        follow,
    })
}

pub fn handle_stream_attached(
    state: &mut AppState,
    cancel_tx: watch::Sender<bool>,
) -> UpdateResult {
    match state.logs.as_mut() {
        Some(session) => session.attach_cancel(cancel_tx),
        // Session closed before the stream opened; dropping the sender
        // ends the reader
        None => drop(cancel_tx),
    }
    UpdateResult::none()
}

pub fn handle_log_records(state: &mut AppState, records: Vec<LogRecord>) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.append_records(records);
    }
    UpdateResult::none()
}

pub fn handle_stream_ended(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.mark_ended();
    }
    UpdateResult::none()
}

pub fn handle_stream_failed(state: &mut AppState, error: String) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.mark_failed(error);
    }
    UpdateResult::none()
}

pub fn handle_open_failed(state: &mut AppState, error: String) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.mark_open_failed(error);
    }
    UpdateResult::none()
}

pub fn handle_close_logs(state: &mut AppState) -> UpdateResult {
    let Some(mut session) = state.logs.take() else {
        return UpdateResult::none();
    };
    session.cancel_stream();

    if state.standalone_logs {
        state.should_quit = true;
        return UpdateResult::none();
    }
    UpdateResult::message(Message::Refresh)
}

// ─────────────────────────────────────────────────────────────────────────────
// Pause & Search
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_toggle_pause(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.toggle_pause();
    }
    UpdateResult::none()
}

pub fn handle_start_search(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.begin_search();
    }
    UpdateResult::none()
}

pub fn handle_search_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.push_input(c);
    }
    UpdateResult::none()
}

pub fn handle_search_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.pop_input();
    }
    UpdateResult::none()
}

pub fn handle_search_clear_input(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.clear_input();
    }
    UpdateResult::none()
}

pub fn handle_search_confirm(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.confirm_search();
    }
    UpdateResult::none()
}

pub fn handle_search_cancel(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.cancel_search();
    }
    UpdateResult::none()
}

pub fn handle_clear_filter(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.clear_filter();
    }
    UpdateResult::none()
}

pub fn handle_next_match(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.next_match();
    }
    UpdateResult::none()
}

pub fn handle_previous_match(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.previous_match();
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Scrolling
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.view.scroll_up(1);
    }
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.view.scroll_down(1);
    }
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.view.page_up();
    }
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.view.page_down();
    }
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.view.scroll_to_top();
    }
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.view.scroll_to_bottom();
    }
    UpdateResult::none()
}

pub fn handle_scroll_left(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.view.scroll_left(H_SCROLL_STEP);
    }
    UpdateResult::none()
}

pub fn handle_scroll_right(state: &mut AppState) -> UpdateResult {
    if let Some(session) = state.logs.as_mut() {
        session.view.scroll_right(H_SCROLL_STEP);
    }
    UpdateResult::none()
}
