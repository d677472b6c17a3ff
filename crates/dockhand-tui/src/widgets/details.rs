//! Container inspect popup

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dockhand_client::models::short_id;
use dockhand_client::ContainerDetails;

use crate::theme::{palette, styles};
use crate::widgets::overlay;

/// Centered popup with the inspect snapshot of one container
pub struct DetailsPanel<'a> {
    details: &'a ContainerDetails,
}

impl<'a> DetailsPanel<'a> {
    pub fn new(details: &'a ContainerDetails) -> Self {
        Self { details }
    }

    fn field(label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {label:<14}"),
                Style::default().fg(palette::TEXT_MUTED),
            ),
            Span::styled(value, styles::text_primary()),
        ])
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        let d = self.details;
        let (glyph, glyph_style) = styles::state_indicator(&d.state.status);

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  state         ", Style::default().fg(palette::TEXT_MUTED)),
                Span::styled(format!("{glyph} {}", d.state.status), glyph_style),
            ]),
            Self::field("id", short_id(&d.id).to_string()),
            Self::field("image", d.config.image.clone()),
            Self::field("created", d.created.clone()),
        ];

        if d.state.running {
            lines.push(Self::field("started", d.state.started_at.clone()));
        } else {
            lines.push(Self::field("exit code", d.state.exit_code.to_string()));
            if !d.state.finished_at.is_empty() {
                lines.push(Self::field("finished", d.state.finished_at.clone()));
            }
        }

        lines.push(Self::field("restarts", d.restart_count.to_string()));
        lines.push(Self::field("tty", if d.is_tty() { "yes" } else { "no" }.to_string()));

        if let Some(cmd) = &d.config.cmd {
            lines.push(Self::field("cmd", cmd.join(" ")));
        }

        if let Some(env) = &d.config.env {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  environment ({})", env.len()),
                Style::default()
                    .fg(palette::TEXT_MUTED)
                    .add_modifier(Modifier::BOLD),
            )));
            for entry in env.iter().take(8) {
                lines.push(Line::from(Span::styled(
                    format!("    {entry}"),
                    styles::text_secondary(),
                )));
            }
            if env.len() > 8 {
                lines.push(Line::from(Span::styled(
                    format!("    ... {} more", env.len() - 8),
                    Style::default().fg(palette::TEXT_MUTED),
                )));
            }
        }

        lines
    }
}

impl Widget for DetailsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = overlay::centered_rect_percent(70, 70, area);

        overlay::dim_background(buf, area);
        overlay::clear_area(buf, popup);

        let title = format!(" Inspect: {} ", self.details.display_name());
        let block = styles::popup_block(&title);
        let inner = block.inner(popup);
        block.render(popup, buf);

        Paragraph::new(self.build_lines()).render(inner, buf);
    }
}
