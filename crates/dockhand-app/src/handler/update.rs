//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `views`: list loads, container/image/volume/network actions
//! - `log_view`: log session lifecycle, search, scroll, pause
//! - `keys`: key translation (keymap lookup plus selection context)

use crate::message::Message;
use crate::state::{AppState, StatusMessage};

use super::{keys::handle_key, log_view, views, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => views::handle_tick(state),

        // Redraw happens on the next frame; widths are re-measured there
        Message::Resize => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // View Navigation
        // ─────────────────────────────────────────────────────────
        Message::SwitchView(view) => views::handle_switch_view(state, view),

        Message::NextView => {
            let next = state.view.next();
            views::handle_switch_view(state, next)
        }

        Message::PreviousView => {
            let previous = state.view.previous();
            views::handle_switch_view(state, previous)
        }

        Message::Refresh => views::handle_refresh(state),

        Message::SelectNext => {
            state.select_next();
            UpdateResult::none()
        }

        Message::SelectPrevious => {
            state.select_previous();
            UpdateResult::none()
        }

        Message::SelectFirst => {
            state.select_first();
            UpdateResult::none()
        }

        Message::SelectLast => {
            state.select_last();
            UpdateResult::none()
        }

        Message::ToggleHelp => {
            state.show_help = !state.show_help;
            UpdateResult::none()
        }

        Message::ToggleAllContainers => views::handle_toggle_all_containers(state),

        // ─────────────────────────────────────────────────────────
        // Data Arrival
        // ─────────────────────────────────────────────────────────
        Message::ContainersLoaded { containers } => {
            views::handle_containers_loaded(state, containers)
        }

        Message::ImagesLoaded { images } => views::handle_images_loaded(state, images),

        Message::VolumesLoaded { volumes } => views::handle_volumes_loaded(state, volumes),

        Message::NetworksLoaded { networks } => views::handle_networks_loaded(state, networks),

        Message::SystemLoaded { info, version } => {
            views::handle_system_loaded(state, *info, *version)
        }

        Message::ViewLoadFailed {
            view,
            error,
            unreachable,
        } => views::handle_view_load_failed(state, view, error, unreachable),

        Message::StatsSampled {
            container_id,
            stats,
        } => views::handle_stats_sampled(state, container_id, *stats),

        Message::ContainerInspected { details } => {
            views::handle_container_inspected(state, *details)
        }

        Message::CloseDetails => {
            state.details = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Container / Image / Volume / Network Actions
        // ─────────────────────────────────────────────────────────
        Message::StartContainer { id, name } => views::handle_start_container(state, id, name),

        Message::StopContainer { id, name } => views::handle_stop_container(state, id, name),

        Message::RestartContainer { id, name } => views::handle_restart_container(state, id, name),

        Message::RemoveContainer { id, name } => views::handle_remove_container(state, id, name),

        Message::InspectContainer { id } => views::handle_inspect_container(state, id),

        Message::RemoveImage { id, name } => views::handle_remove_image(state, id, name),

        Message::RemoveVolume { name } => views::handle_remove_volume(state, name),

        Message::RemoveNetwork { id, name } => views::handle_remove_network(state, id, name),

        Message::PruneView => views::handle_prune_view(state),

        Message::ActionCompleted { verb, target } => {
            views::handle_action_completed(state, verb, target)
        }

        Message::ActionFailed { action, error } => {
            views::handle_action_failed(state, action, error)
        }

        Message::PruneCompleted { what, report } => {
            views::handle_prune_completed(state, what, report)
        }

        // ─────────────────────────────────────────────────────────
        // Log Session Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::OpenLogs {
            id,
            name,
            tail,
            follow,
        } => log_view::handle_open_logs(state, id, name, tail, follow),

        Message::LogStreamAttached { cancel_tx } => {
            log_view::handle_stream_attached(state, cancel_tx)
        }

        Message::LogRecords { records } => log_view::handle_log_records(state, records),

        Message::LogStreamEnded => log_view::handle_stream_ended(state),

        Message::LogStreamFailed { error } => log_view::handle_stream_failed(state, error),

        Message::LogStreamOpenFailed { error } => log_view::handle_open_failed(state, error),

        Message::CloseLogs => log_view::handle_close_logs(state),

        // ─────────────────────────────────────────────────────────
        // Log Viewer Controls
        // ─────────────────────────────────────────────────────────
        Message::TogglePause => log_view::handle_toggle_pause(state),

        Message::StartSearch => log_view::handle_start_search(state),

        Message::SearchInput { c } => log_view::handle_search_input(state, c),

        Message::SearchBackspace => log_view::handle_search_backspace(state),

        Message::SearchClearInput => log_view::handle_search_clear_input(state),

        Message::SearchConfirm => log_view::handle_search_confirm(state),

        Message::SearchCancel => log_view::handle_search_cancel(state),

        Message::ClearFilter => log_view::handle_clear_filter(state),

        Message::NextMatch => log_view::handle_next_match(state),

        Message::PreviousMatch => log_view::handle_previous_match(state),

        // ─────────────────────────────────────────────────────────
        // Log Viewer Scrolling
        // ─────────────────────────────────────────────────────────
        Message::LogScrollUp => log_view::handle_scroll_up(state),

        Message::LogScrollDown => log_view::handle_scroll_down(state),

        Message::LogPageUp => log_view::handle_page_up(state),

        Message::LogPageDown => log_view::handle_page_down(state),

        Message::LogScrollTop => log_view::handle_scroll_to_top(state),

        Message::LogScrollBottom => log_view::handle_scroll_to_bottom(state),

        Message::LogScrollLeft => log_view::handle_scroll_left(state),

        Message::LogScrollRight => log_view::handle_scroll_right(state),

        // ─────────────────────────────────────────────────────────
        // Status Bar
        // ─────────────────────────────────────────────────────────
        Message::ShowStatus { text, error } => {
            let status = if error {
                StatusMessage::error(text)
            } else {
                StatusMessage::info(text)
            };
            state.set_status(status);
            UpdateResult::none()
        }

        Message::ClearStatus => {
            state.status = None;
            UpdateResult::none()
        }
    }
}
