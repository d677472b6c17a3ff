//! Engine overview dashboard
//!
//! Summary tiles built from the `/info` and `/version` snapshots. Counts
//! come straight from the engine rather than the cached container list, so
//! the dashboard stays truthful even when the list was fetched with
//! different filters.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dockhand_client::format::format_bytes;
use dockhand_client::{SystemInfo, VersionInfo};

use crate::theme::{palette, styles};

/// Dashboard widget; renders placeholders until the snapshots arrive
pub struct Dashboard<'a> {
    system: Option<&'a SystemInfo>,
    version: Option<&'a VersionInfo>,
}

impl<'a> Dashboard<'a> {
    pub fn new(system: Option<&'a SystemInfo>, version: Option<&'a VersionInfo>) -> Self {
        Self { system, version }
    }

    fn count_line(glyph: &'static str, count: i64, label: &'static str, style: Style) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {glyph} "), style),
            Span::styled(
                format!("{count:>4}  "),
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(label, Style::default().fg(palette::TEXT_SECONDARY)),
        ])
    }

    fn containers_tile(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" Containers ");
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(info) = self.system else {
            Paragraph::new("...").render(inner, buf);
            return;
        };

        let lines = vec![
            Line::from(""),
            Self::count_line(
                "●",
                info.containers_running,
                "running",
                Style::default().fg(palette::STATE_RUNNING),
            ),
            Self::count_line(
                "⏸",
                info.containers_paused,
                "paused",
                Style::default().fg(palette::STATE_PAUSED),
            ),
            Self::count_line(
                "○",
                info.containers_stopped,
                "stopped",
                Style::default().fg(palette::STATE_STOPPED),
            ),
            Line::from(""),
            Line::from(Span::styled(
                format!("  {} total", info.containers),
                Style::default().fg(palette::TEXT_MUTED),
            )),
        ];
        Paragraph::new(lines).render(inner, buf);
    }

    fn images_tile(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" Images ");
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(info) = self.system else {
            Paragraph::new("...").render(inner, buf);
            return;
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{}", info.images),
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled("stored locally", Style::default().fg(palette::TEXT_MUTED)))
                .alignment(Alignment::Center),
        ];
        Paragraph::new(lines).render(inner, buf);
    }

    fn host_tile(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" Host ");
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(info) = self.system else {
            Paragraph::new("...").render(inner, buf);
            return;
        };

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  name    ", Style::default().fg(palette::TEXT_MUTED)),
                Span::styled(info.name.clone(), styles::text_primary()),
            ]),
            Line::from(vec![
                Span::styled("  os      ", Style::default().fg(palette::TEXT_MUTED)),
                Span::styled(info.operating_system.clone(), styles::text_secondary()),
            ]),
            Line::from(vec![
                Span::styled("  cpus    ", Style::default().fg(palette::TEXT_MUTED)),
                Span::styled(format!("{}", info.ncpu), styles::text_secondary()),
            ]),
            Line::from(vec![
                Span::styled("  memory  ", Style::default().fg(palette::TEXT_MUTED)),
                Span::styled(
                    format_bytes(info.mem_total.max(0) as u64),
                    styles::text_secondary(),
                ),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }

    fn engine_panel(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" Engine ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from("")];
        match (self.version, self.system) {
            (Some(version), system) => {
                lines.push(Line::from(vec![
                    Span::styled("  version      ", Style::default().fg(palette::TEXT_MUTED)),
                    Span::styled(
                        version.version.clone(),
                        styles::text_primary().add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("  api version  ", Style::default().fg(palette::TEXT_MUTED)),
                    Span::styled(version.api_version.clone(), styles::text_secondary()),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("  platform     ", Style::default().fg(palette::TEXT_MUTED)),
                    Span::styled(
                        format!("{}/{}", version.os, version.arch),
                        styles::text_secondary(),
                    ),
                ]));
                if let Some(info) = system {
                    lines.push(Line::from(vec![
                        Span::styled("  server       ", Style::default().fg(palette::TEXT_MUTED)),
                        Span::styled(info.server_version.clone(), styles::text_secondary()),
                    ]));
                }
            }
            (None, _) => {
                lines.push(Line::from(Span::styled(
                    "  Loading engine information...",
                    Style::default().fg(palette::TEXT_MUTED),
                )));
            }
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([Constraint::Length(9), Constraint::Min(5)]).split(area);
        let tiles = Layout::horizontal([
            Constraint::Percentage(34),
            Constraint::Percentage(26),
            Constraint::Percentage(40),
        ])
        .split(rows[0]);

        self.containers_tile(tiles[0], buf);
        self.images_tile(tiles[1], buf);
        self.host_tile(tiles[2], buf);
        self.engine_panel(rows[1], buf);
    }
}
