//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_info() -> Style {
    Style::default().fg(palette::STATUS_INFO)
}

pub fn status_error() -> Style {
    Style::default()
        .fg(palette::STATUS_ERROR)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn key_hint() -> Style {
    Style::default().fg(palette::KEY_HINT)
}

/// "Black on Cyan" - the selected row in every table
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn panel_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Container state mapping ---

/// State indicator for container rows and tabs.
///
/// Returns `(icon, Style)` for the engine's state string.
pub fn state_indicator(state: &str) -> (&'static str, Style) {
    match state {
        "running" => (
            "●",
            Style::default()
                .fg(palette::STATE_RUNNING)
                .add_modifier(Modifier::BOLD),
        ),
        "paused" => ("⏸", Style::default().fg(palette::STATE_PAUSED)),
        "restarting" => (
            "↻",
            Style::default()
                .fg(palette::STATE_RESTARTING)
                .add_modifier(Modifier::BOLD),
        ),
        "dead" => ("✖", Style::default().fg(palette::STATE_DEAD)),
        // created, exited, removing
        _ => ("○", Style::default().fg(palette::STATE_STOPPED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_accent_bold_has_modifier() {
        let style = accent_bold();
        assert_eq!(style.fg, Some(palette::ACCENT));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_focused_selected_uses_contrast_on_accent() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
    }

    #[test]
    fn test_state_indicator_running() {
        let (icon, style) = state_indicator("running");
        assert_eq!(icon, "●");
        assert_eq!(style.fg, Some(palette::STATE_RUNNING));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_state_indicator_paused() {
        let (icon, style) = state_indicator("paused");
        assert_eq!(icon, "⏸");
        assert_eq!(style.fg, Some(palette::STATE_PAUSED));
    }

    #[test]
    fn test_state_indicator_dead() {
        let (icon, style) = state_indicator("dead");
        assert_eq!(icon, "✖");
        assert_eq!(style.fg, Some(palette::STATE_DEAD));
    }

    #[test]
    fn test_state_indicator_unknown_states_fall_back_to_stopped() {
        for state in ["exited", "created", "removing", "whatever"] {
            let (icon, style) = state_indicator(state);
            assert_eq!(icon, "○");
            assert_eq!(style.fg, Some(palette::STATE_STOPPED));
        }
    }
}
