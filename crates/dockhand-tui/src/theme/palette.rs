//! Color palette
//!
//! Named terminal colors throughout, so the UI inherits the user's
//! terminal scheme instead of forcing RGB values.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const POPUP_BG: Color = Color::Black; // Help overlay and details pane

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent (tabs, titles)
pub const CONTRAST_FG: Color = Color::Black; // Foreground on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Container states ---
pub const STATE_RUNNING: Color = Color::Green;
pub const STATE_PAUSED: Color = Color::Yellow;
pub const STATE_RESTARTING: Color = Color::Yellow;
pub const STATE_STOPPED: Color = Color::DarkGray;
pub const STATE_DEAD: Color = Color::Red;

// --- Status line ---
pub const STATUS_INFO: Color = Color::Green;
pub const STATUS_ERROR: Color = Color::Red;
pub const KEY_HINT: Color = Color::Yellow;

// --- Log lines ---
pub const LOG_TEXT: Color = Color::Gray;
pub const LOG_STDERR: Color = Color::LightRed;

// --- Search highlight ---
pub const SEARCH_HIGHLIGHT_FG: Color = Color::Black;
pub const SEARCH_HIGHLIGHT_BG: Color = Color::Yellow;
pub const SEARCH_CURRENT_FG: Color = Color::Black;
pub const SEARCH_CURRENT_BG: Color = Color::LightYellow;
