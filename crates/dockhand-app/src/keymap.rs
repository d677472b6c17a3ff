//! Declarative key bindings
//!
//! One table per input scope, consumed by both the key dispatcher and the
//! help bar. Hints can never drift from handling because both read the
//! same rows. Scopes layer: a list view sees its own rows, then the rows
//! shared by all list views, then the global rows; the log viewer scopes
//! deliberately exclude the global rows so `q` and `Esc` can mean
//! something else there.

use crate::input_key::InputKey;
use crate::state::View;

/// Which binding table applies, derived from the focused UI element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScope {
    Dashboard,
    Containers,
    Images,
    Volumes,
    Networks,
    /// Log viewer without an active filter
    LogNormal,
    /// Log viewer with an active filter
    LogFiltered,
    /// Log viewer while composing a search pattern
    LogSearch,
}

impl KeyScope {
    pub fn for_view(view: View) -> Self {
        match view {
            View::Dashboard => KeyScope::Dashboard,
            View::Containers => KeyScope::Containers,
            View::Images => KeyScope::Images,
            View::Volumes => KeyScope::Volumes,
            View::Networks => KeyScope::Networks,
        }
    }
}

/// What a key press means, before the dispatcher fills in the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    // ─── Global ───
    Quit,
    Help,
    NextView,
    PreviousView,
    SwitchView(View),
    Refresh,
    // ─── List views ───
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    ToggleAll,
    Start,
    Stop,
    Restart,
    Remove,
    Prune,
    OpenLogs,
    Inspect,
    // ─── Log viewer ───
    LogClose,
    LogClearFilter,
    OpenSearch,
    LogPause,
    LogNextMatch,
    LogPrevMatch,
    LogUp,
    LogDown,
    LogPageUp,
    LogPageDown,
    LogTop,
    LogBottom,
    LogLeft,
    LogRight,
    // ─── Search entry ───
    SearchConfirm,
    SearchCancel,
    SearchBackspace,
    SearchClearInput,
}

/// One row of the binding table
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    /// All keys that trigger the command
    pub keys: &'static [InputKey],
    pub command: KeyCommand,
    /// Key name shown in the help bar
    pub hint: &'static str,
    /// Action name shown in the help bar
    pub label: &'static str,
    /// Keep visible when the help bar runs out of width
    pub essential: bool,
}

const fn bind(
    keys: &'static [InputKey],
    command: KeyCommand,
    hint: &'static str,
    label: &'static str,
    essential: bool,
) -> KeyBinding {
    KeyBinding {
        keys,
        command,
        hint,
        label,
        essential,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tables
// ─────────────────────────────────────────────────────────────────────────────

const GLOBAL: &[KeyBinding] = &[
    bind(&[InputKey::Char('q')], KeyCommand::Quit, "q", "quit", true),
    bind(&[InputKey::Char('?')], KeyCommand::Help, "?", "help", true),
    bind(&[InputKey::Tab], KeyCommand::NextView, "tab", "next view", false),
    bind(
        &[InputKey::BackTab],
        KeyCommand::PreviousView,
        "S-tab",
        "prev view",
        false,
    ),
    bind(
        &[InputKey::CharCtrl('r'), InputKey::F(5)],
        KeyCommand::Refresh,
        "^r",
        "refresh",
        true,
    ),
    bind(
        &[InputKey::Char('1')],
        KeyCommand::SwitchView(View::Dashboard),
        "1",
        "dashboard",
        false,
    ),
    bind(
        &[InputKey::Char('2')],
        KeyCommand::SwitchView(View::Containers),
        "2",
        "containers",
        false,
    ),
    bind(
        &[InputKey::Char('3')],
        KeyCommand::SwitchView(View::Images),
        "3",
        "images",
        false,
    ),
    bind(
        &[InputKey::Char('4')],
        KeyCommand::SwitchView(View::Volumes),
        "4",
        "volumes",
        false,
    ),
    bind(
        &[InputKey::Char('5')],
        KeyCommand::SwitchView(View::Networks),
        "5",
        "networks",
        false,
    ),
];

const LIST_COMMON: &[KeyBinding] = &[
    bind(
        &[InputKey::Down, InputKey::Char('j')],
        KeyCommand::SelectNext,
        "↓/j",
        "down",
        true,
    ),
    bind(
        &[InputKey::Up, InputKey::Char('k')],
        KeyCommand::SelectPrevious,
        "↑/k",
        "up",
        true,
    ),
    bind(
        &[InputKey::Home, InputKey::Char('g')],
        KeyCommand::SelectFirst,
        "g",
        "first",
        false,
    ),
    bind(
        &[InputKey::End, InputKey::Char('G')],
        KeyCommand::SelectLast,
        "G",
        "last",
        false,
    ),
];

const DASHBOARD: &[KeyBinding] = &[];

const CONTAINERS: &[KeyBinding] = &[
    bind(
        &[InputKey::Char('L')],
        KeyCommand::OpenLogs,
        "L",
        "logs",
        true,
    ),
    bind(
        &[InputKey::Enter],
        KeyCommand::Inspect,
        "enter",
        "inspect",
        false,
    ),
    bind(
        &[InputKey::Char('s')],
        KeyCommand::Start,
        "s",
        "start",
        true,
    ),
    bind(&[InputKey::Char('x')], KeyCommand::Stop, "x", "stop", true),
    bind(
        &[InputKey::Char('r')],
        KeyCommand::Restart,
        "r",
        "restart",
        false,
    ),
    bind(
        &[InputKey::Char('d')],
        KeyCommand::Remove,
        "d",
        "remove",
        false,
    ),
    bind(
        &[InputKey::Char('a')],
        KeyCommand::ToggleAll,
        "a",
        "all",
        false,
    ),
    bind(
        &[InputKey::Char('p')],
        KeyCommand::Prune,
        "p",
        "prune",
        false,
    ),
];

const IMAGES: &[KeyBinding] = &[
    bind(
        &[InputKey::Char('d')],
        KeyCommand::Remove,
        "d",
        "remove",
        true,
    ),
    bind(
        &[InputKey::Char('p')],
        KeyCommand::Prune,
        "p",
        "prune",
        false,
    ),
];

const VOLUMES: &[KeyBinding] = &[
    bind(
        &[InputKey::Char('d')],
        KeyCommand::Remove,
        "d",
        "remove",
        true,
    ),
    bind(
        &[InputKey::Char('p')],
        KeyCommand::Prune,
        "p",
        "prune",
        false,
    ),
];

const NETWORKS: &[KeyBinding] = &[
    bind(
        &[InputKey::Char('d')],
        KeyCommand::Remove,
        "d",
        "remove",
        true,
    ),
    bind(
        &[InputKey::Char('p')],
        KeyCommand::Prune,
        "p",
        "prune",
        false,
    ),
];

const LOG_COMMON: &[KeyBinding] = &[
    bind(
        &[InputKey::Up, InputKey::Char('k')],
        KeyCommand::LogUp,
        "↑/k",
        "scroll",
        true,
    ),
    bind(
        &[InputKey::Down, InputKey::Char('j')],
        KeyCommand::LogDown,
        "↓/j",
        "scroll",
        true,
    ),
    bind(
        &[InputKey::PageUp],
        KeyCommand::LogPageUp,
        "pgup",
        "page",
        false,
    ),
    bind(
        &[InputKey::PageDown],
        KeyCommand::LogPageDown,
        "pgdn",
        "page",
        false,
    ),
    bind(
        &[InputKey::Home, InputKey::Char('g')],
        KeyCommand::LogTop,
        "g",
        "oldest",
        false,
    ),
    bind(
        &[InputKey::End, InputKey::Char('G')],
        KeyCommand::LogBottom,
        "G",
        "newest",
        false,
    ),
    bind(
        &[InputKey::Left],
        KeyCommand::LogLeft,
        "←/→",
        "pan",
        false,
    ),
    // Help text for panning lives on the Left row
    bind(&[InputKey::Right], KeyCommand::LogRight, "", "", false),
    bind(
        &[InputKey::Char(' ')],
        KeyCommand::LogPause,
        "space",
        "pause",
        true,
    ),
    bind(
        &[InputKey::Char('/')],
        KeyCommand::OpenSearch,
        "/",
        "search",
        true,
    ),
    bind(
        &[InputKey::Char('n')],
        KeyCommand::LogNextMatch,
        "n",
        "next match",
        false,
    ),
    bind(
        &[InputKey::Char('N')],
        KeyCommand::LogPrevMatch,
        "N",
        "prev match",
        false,
    ),
];

const LOG_NORMAL: &[KeyBinding] = &[bind(
    &[InputKey::Esc, InputKey::Char('q')],
    KeyCommand::LogClose,
    "esc/q",
    "close",
    true,
)];

const LOG_FILTERED: &[KeyBinding] = &[
    bind(
        &[InputKey::Esc],
        KeyCommand::LogClearFilter,
        "esc",
        "clear filter",
        true,
    ),
    bind(
        &[InputKey::Char('q')],
        KeyCommand::LogClose,
        "q",
        "close",
        true,
    ),
];

const LOG_SEARCH: &[KeyBinding] = &[
    bind(
        &[InputKey::Enter],
        KeyCommand::SearchConfirm,
        "enter",
        "apply",
        true,
    ),
    bind(
        &[InputKey::Esc],
        KeyCommand::SearchCancel,
        "esc",
        "cancel",
        true,
    ),
    bind(
        &[InputKey::Backspace],
        KeyCommand::SearchBackspace,
        "bksp",
        "erase",
        false,
    ),
    bind(
        &[InputKey::CharCtrl('u')],
        KeyCommand::SearchClearInput,
        "^u",
        "clear",
        false,
    ),
];

// ─────────────────────────────────────────────────────────────────────────────
// Lookup
// ─────────────────────────────────────────────────────────────────────────────

/// Binding sections for a scope, most specific first
pub fn sections(scope: KeyScope) -> &'static [&'static [KeyBinding]] {
    match scope {
        KeyScope::Dashboard => &[DASHBOARD, GLOBAL],
        KeyScope::Containers => &[CONTAINERS, LIST_COMMON, GLOBAL],
        KeyScope::Images => &[IMAGES, LIST_COMMON, GLOBAL],
        KeyScope::Volumes => &[VOLUMES, LIST_COMMON, GLOBAL],
        KeyScope::Networks => &[NETWORKS, LIST_COMMON, GLOBAL],
        KeyScope::LogNormal => &[LOG_NORMAL, LOG_COMMON],
        KeyScope::LogFiltered => &[LOG_FILTERED, LOG_COMMON],
        KeyScope::LogSearch => &[LOG_SEARCH],
    }
}

/// Resolve a key press within a scope
pub fn lookup(scope: KeyScope, key: InputKey) -> Option<KeyCommand> {
    sections(scope)
        .iter()
        .flat_map(|section| section.iter())
        .find(|binding| binding.keys.contains(&key))
        .map(|binding| binding.command)
}

/// All bindings a help surface should list for a scope, in display order.
/// Rows with an empty label are dispatch-only and skipped.
pub fn help_bindings(scope: KeyScope) -> impl Iterator<Item = &'static KeyBinding> {
    sections(scope)
        .iter()
        .flat_map(|section| section.iter())
        .filter(|binding| !binding.label.is_empty())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
