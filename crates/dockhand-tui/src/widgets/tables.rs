//! Resource list tables: containers, images, volumes, networks
//!
//! One widget per view, all built the same way: a header row, one row per
//! resource, the cursor row highlighted. Selection lives in `AppState`; the
//! widgets only display it.

use std::collections::HashMap;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::Span,
    widgets::{Cell, Row, StatefulWidget, Table, TableState, Widget},
};

use dockhand_client::format::{format_age, format_bytes, format_ports, truncate};
use dockhand_client::{
    ContainerStats, ContainerSummary, ImageSummary, NetworkSummary, VolumeSummary,
};

use crate::theme::styles;

fn header_row(titles: &[&'static str]) -> Row<'static> {
    Row::new(
        titles
            .iter()
            .map(|t| Cell::from(*t).style(styles::accent_bold())),
    )
    .height(1)
}

fn selection_style() -> Style {
    styles::focused_selected()
}

// ─────────────────────────────────────────────────────────────────────────────
// Containers
// ─────────────────────────────────────────────────────────────────────────────

/// Container list with live stats columns
pub struct ContainerTable<'a> {
    containers: &'a [ContainerSummary],
    stats: &'a HashMap<String, ContainerStats>,
    selected: usize,
    all: bool,
}

impl<'a> ContainerTable<'a> {
    pub fn new(
        containers: &'a [ContainerSummary],
        stats: &'a HashMap<String, ContainerStats>,
        selected: usize,
    ) -> Self {
        Self {
            containers,
            stats,
            selected,
            all: false,
        }
    }

    /// Stopped containers are included; reflect that in the title
    pub fn all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    fn row(&self, container: &ContainerSummary) -> Row<'static> {
        let (glyph, glyph_style) = styles::state_indicator(&container.state);

        let cpu = self
            .stats
            .get(&container.id)
            .map(|s| format!("{:.1}%", s.cpu_percent()))
            .unwrap_or_else(|| "-".to_string());
        let mem = self
            .stats
            .get(&container.id)
            .map(|s| format_bytes(s.memory_usage()))
            .unwrap_or_else(|| "-".to_string());

        Row::new(vec![
            Cell::from(truncate(container.display_name(), 24)).style(styles::text_primary()),
            Cell::from(Span::styled(
                format!("{glyph} {}", container.state),
                glyph_style,
            )),
            Cell::from(truncate(&container.image, 28)).style(styles::text_secondary()),
            Cell::from(truncate(&format_ports(&container.ports), 26))
                .style(styles::text_muted()),
            Cell::from(cpu).style(styles::text_secondary()),
            Cell::from(mem).style(styles::text_secondary()),
            Cell::from(container.status.clone()).style(styles::text_muted()),
        ])
        .height(1)
    }
}

impl Widget for ContainerTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.all {
            format!(" Containers ({}, all) ", self.containers.len())
        } else {
            format!(" Containers ({}) ", self.containers.len())
        };

        let rows: Vec<Row> = self.containers.iter().map(|c| self.row(c)).collect();
        let widths = [
            Constraint::Length(24),
            Constraint::Length(14),
            Constraint::Length(28),
            Constraint::Min(16),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(22),
        ];

        let table = Table::new(rows, widths)
            .header(header_row(&[
                "NAME", "STATE", "IMAGE", "PORTS", "CPU", "MEM", "STATUS",
            ]))
            .block(styles::panel_block(true).title(title))
            .row_highlight_style(selection_style())
            .highlight_symbol("▶ ");

        let mut table_state = TableState::default().with_selected(Some(self.selected));
        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Images
// ─────────────────────────────────────────────────────────────────────────────

pub struct ImageTable<'a> {
    images: &'a [ImageSummary],
    selected: usize,
}

impl<'a> ImageTable<'a> {
    pub fn new(images: &'a [ImageSummary], selected: usize) -> Self {
        Self { images, selected }
    }

    fn row(image: &ImageSummary) -> Row<'static> {
        let in_use = if image.containers > 0 {
            format!("{}", image.containers)
        } else {
            "-".to_string()
        };

        Row::new(vec![
            Cell::from(truncate(image.reference(), 44)).style(styles::text_primary()),
            Cell::from(image.short_id().to_string()).style(styles::text_muted()),
            Cell::from(format_age(image.created)).style(styles::text_secondary()),
            Cell::from(format_bytes(image.size as u64)).style(styles::text_secondary()),
            Cell::from(in_use).style(styles::text_muted()),
        ])
        .height(1)
    }
}

impl Widget for ImageTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self.images.iter().map(Self::row).collect();
        let widths = [
            Constraint::Min(30),
            Constraint::Length(14),
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(12),
        ];

        let table = Table::new(rows, widths)
            .header(header_row(&[
                "REPOSITORY:TAG",
                "ID",
                "CREATED",
                "SIZE",
                "CONTAINERS",
            ]))
            .block(styles::panel_block(true).title(format!(" Images ({}) ", self.images.len())))
            .row_highlight_style(selection_style())
            .highlight_symbol("▶ ");

        let mut table_state = TableState::default().with_selected(Some(self.selected));
        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Volumes
// ─────────────────────────────────────────────────────────────────────────────

pub struct VolumeTable<'a> {
    volumes: &'a [VolumeSummary],
    selected: usize,
}

impl<'a> VolumeTable<'a> {
    pub fn new(volumes: &'a [VolumeSummary], selected: usize) -> Self {
        Self { volumes, selected }
    }

    fn row(volume: &VolumeSummary) -> Row<'static> {
        Row::new(vec![
            Cell::from(truncate(&volume.name, 36)).style(styles::text_primary()),
            Cell::from(volume.driver.clone()).style(styles::text_secondary()),
            Cell::from(volume.scope.clone()).style(styles::text_muted()),
            Cell::from(truncate(&volume.mountpoint, 48)).style(styles::text_muted()),
        ])
        .height(1)
    }
}

impl Widget for VolumeTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self.volumes.iter().map(Self::row).collect();
        let widths = [
            Constraint::Length(36),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Min(24),
        ];

        let table = Table::new(rows, widths)
            .header(header_row(&["NAME", "DRIVER", "SCOPE", "MOUNTPOINT"]))
            .block(styles::panel_block(true).title(format!(" Volumes ({}) ", self.volumes.len())))
            .row_highlight_style(selection_style())
            .highlight_symbol("▶ ");

        let mut table_state = TableState::default().with_selected(Some(self.selected));
        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Networks
// ─────────────────────────────────────────────────────────────────────────────

pub struct NetworkTable<'a> {
    networks: &'a [NetworkSummary],
    selected: usize,
}

impl<'a> NetworkTable<'a> {
    pub fn new(networks: &'a [NetworkSummary], selected: usize) -> Self {
        Self { networks, selected }
    }

    fn row(network: &NetworkSummary) -> Row<'static> {
        let mut flags = Vec::new();
        if network.internal {
            flags.push("internal");
        }
        if network.attachable {
            flags.push("attachable");
        }

        Row::new(vec![
            Cell::from(truncate(&network.name, 30)).style(styles::text_primary()),
            Cell::from(network.short_id().to_string()).style(styles::text_muted()),
            Cell::from(network.driver.clone()).style(styles::text_secondary()),
            Cell::from(network.scope.clone()).style(styles::text_muted()),
            Cell::from(flags.join(", ")).style(styles::text_muted()),
        ])
        .height(1)
    }
}

impl Widget for NetworkTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self.networks.iter().map(Self::row).collect();
        let widths = [
            Constraint::Length(30),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Min(12),
        ];

        let table = Table::new(rows, widths)
            .header(header_row(&["NAME", "ID", "DRIVER", "SCOPE", "FLAGS"]))
            .block(
                styles::panel_block(true).title(format!(" Networks ({}) ", self.networks.len())),
            )
            .row_highlight_style(selection_style())
            .highlight_symbol("▶ ");

        let mut table_state = TableState::default().with_selected(Some(self.selected));
        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
