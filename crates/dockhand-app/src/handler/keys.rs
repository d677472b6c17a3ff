//! Key event handlers
//!
//! Translates an [`InputKey`] into a [`Message`] through the declarative
//! keymap, filling in the current selection. While a search pattern is
//! being composed, printable characters bypass the keymap and extend the
//! pattern.

use crate::input_key::InputKey;
use crate::keymap::{self, KeyCommand, KeyScope};
use crate::message::Message;
use crate::session::{LogMode, LogSession};
use crate::state::{AppState, View};

pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C quits from anywhere, including search entry
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if let Some(session) = state.logs.as_ref() {
        return handle_log_key(session, key);
    }

    if state.details.is_some() {
        return match key {
            InputKey::Esc | InputKey::Enter | InputKey::Char('q') => Some(Message::CloseDetails),
            _ => None,
        };
    }

    if state.show_help {
        return match key {
            InputKey::Esc | InputKey::Char('q') | InputKey::Char('?') => Some(Message::ToggleHelp),
            _ => None,
        };
    }

    let scope = KeyScope::for_view(state.view);
    let command = keymap::lookup(scope, key)?;
    command_to_message(state, command)
}

fn handle_log_key(session: &LogSession, key: InputKey) -> Option<Message> {
    // A failed open leaves only one way out
    if session.open_error.is_some() {
        return match key {
            InputKey::Esc | InputKey::Enter | InputKey::Char('q') => Some(Message::CloseLogs),
            _ => None,
        };
    }

    let scope = match session.mode() {
        LogMode::Normal => KeyScope::LogNormal,
        LogMode::Filtered => KeyScope::LogFiltered,
        LogMode::SearchEntry => {
            if let Some(c) = key.as_text_char() {
                return Some(Message::SearchInput { c });
            }
            KeyScope::LogSearch
        }
    };

    let command = keymap::lookup(scope, key)?;
    log_command_to_message(command)
}

/// Resolve a list view command, attaching the selected row where the
/// command needs a target. No selection means no message.
fn command_to_message(state: &AppState, command: KeyCommand) -> Option<Message> {
    match command {
        KeyCommand::Quit => Some(Message::Quit),
        KeyCommand::Help => Some(Message::ToggleHelp),
        KeyCommand::NextView => Some(Message::NextView),
        KeyCommand::PreviousView => Some(Message::PreviousView),
        KeyCommand::SwitchView(view) => Some(Message::SwitchView(view)),
        KeyCommand::Refresh => Some(Message::Refresh),
        KeyCommand::SelectNext => Some(Message::SelectNext),
        KeyCommand::SelectPrevious => Some(Message::SelectPrevious),
        KeyCommand::SelectFirst => Some(Message::SelectFirst),
        KeyCommand::SelectLast => Some(Message::SelectLast),
        KeyCommand::ToggleAll => Some(Message::ToggleAllContainers),
        KeyCommand::Prune => Some(Message::PruneView),

        KeyCommand::OpenLogs => state.selected_container().map(|c| Message::OpenLogs {
            id: c.id.clone(),
            name: c.display_name().to_string(),
            tail: state.settings.log_tail,
            follow: true,
        }),
        KeyCommand::Inspect => state
            .selected_container()
            .map(|c| Message::InspectContainer { id: c.id.clone() }),
        KeyCommand::Start => state.selected_container().map(|c| Message::StartContainer {
            id: c.id.clone(),
            name: c.display_name().to_string(),
        }),
        KeyCommand::Stop => state.selected_container().map(|c| Message::StopContainer {
            id: c.id.clone(),
            name: c.display_name().to_string(),
        }),
        KeyCommand::Restart => state.selected_container().map(|c| Message::RestartContainer {
            id: c.id.clone(),
            name: c.display_name().to_string(),
        }),
        KeyCommand::Remove => remove_selected(state),

        // Log viewer commands never reach a list view scope
        _ => None,
    }
}

/// `Remove` is bound in four scopes; the view decides what it targets
fn remove_selected(state: &AppState) -> Option<Message> {
    match state.view {
        View::Containers => state.selected_container().map(|c| Message::RemoveContainer {
            id: c.id.clone(),
            name: c.display_name().to_string(),
        }),
        View::Images => state.selected_image().map(|i| Message::RemoveImage {
            id: i.id.clone(),
            name: i.reference().to_string(),
        }),
        View::Volumes => state
            .selected_volume()
            .map(|v| Message::RemoveVolume { name: v.name.clone() }),
        View::Networks => state.selected_network().map(|n| Message::RemoveNetwork {
            id: n.id.clone(),
            name: n.name.clone(),
        }),
        View::Dashboard => None,
    }
}

fn log_command_to_message(command: KeyCommand) -> Option<Message> {
    match command {
        KeyCommand::LogClose => Some(Message::CloseLogs),
        KeyCommand::LogClearFilter => Some(Message::ClearFilter),
        KeyCommand::OpenSearch => Some(Message::StartSearch),
        KeyCommand::LogPause => Some(Message::TogglePause),
        KeyCommand::LogNextMatch => Some(Message::NextMatch),
        KeyCommand::LogPrevMatch => Some(Message::PreviousMatch),
        KeyCommand::LogUp => Some(Message::LogScrollUp),
        KeyCommand::LogDown => Some(Message::LogScrollDown),
        KeyCommand::LogPageUp => Some(Message::LogPageUp),
        KeyCommand::LogPageDown => Some(Message::LogPageDown),
        KeyCommand::LogTop => Some(Message::LogScrollTop),
        KeyCommand::LogBottom => Some(Message::LogScrollBottom),
        KeyCommand::LogLeft => Some(Message::LogScrollLeft),
        KeyCommand::LogRight => Some(Message::LogScrollRight),
        KeyCommand::SearchConfirm => Some(Message::SearchConfirm),
        KeyCommand::SearchCancel => Some(Message::SearchCancel),
        KeyCommand::SearchBackspace => Some(Message::SearchBackspace),
        KeyCommand::SearchClearInput => Some(Message::SearchClearInput),
        _ => None,
    }
}
