//! Colored stdout listings for `dockhand ps` and `dockhand images`
//!
//! Plain terminal output, no TUI: fetch once, render once, exit. The
//! rendering itself is pure so the layout is testable without a daemon.

use std::fmt::Write;

use crossterm::style::{StyledContent, Stylize};

use dockhand_client::format::{format_age, format_bytes, format_ports, truncate};
use dockhand_client::{ContainerSummary, DockerClient, ImageSummary};
use dockhand_core::Result;

const ID_WIDTH: usize = 12;
const NAME_WIDTH: usize = 30;
const STATE_WIDTH: usize = 10;
const IMAGE_WIDTH: usize = 30;

const REPO_WIDTH: usize = 45;
const SIZE_WIDTH: usize = 10;
// Three columns, two ` │ ` separators between them
const IMAGE_INNER_WIDTH: usize = REPO_WIDTH + SIZE_WIDTH + ID_WIDTH + 6;

/// `dockhand ps [-a]`
pub async fn print_containers(client: &DockerClient, all: bool) -> Result<()> {
    let containers = client.list_containers(all).await?;
    print!("{}", render_containers(&containers, all));
    Ok(())
}

/// `dockhand images`
pub async fn print_images(client: &DockerClient) -> Result<()> {
    let images = client.list_images().await?;
    print!("{}", render_images(&images));
    Ok(())
}

fn render_containers(containers: &[ContainerSummary], all: bool) -> String {
    let mut buf = String::new();

    if containers.is_empty() {
        let _ = writeln!(buf, "{}", "No containers found".dark_grey());
        if !all {
            let _ = writeln!(
                buf,
                "{}",
                "(use 'dockhand ps -a' to see all containers)".dark_grey()
            );
        }
        return buf;
    }

    let _ = writeln!(buf);
    let _ = writeln!(buf, "{}", "CONTAINERS".cyan().bold());
    let _ = writeln!(buf, "{}", "─".repeat(90).cyan());

    for c in containers {
        let glyph = styled_by_state(state_glyph(&c.state).to_string(), &c.state);
        let id = format!("{:<width$}", c.short_id(), width = ID_WIDTH);
        let name = format!(
            "{:<width$}",
            truncate(c.display_name(), NAME_WIDTH),
            width = NAME_WIDTH
        );
        let state = styled_by_state(
            format!("{:<width$}", truncate(&c.state, STATE_WIDTH), width = STATE_WIDTH),
            &c.state,
        );
        let image = truncate(&c.image, IMAGE_WIDTH);

        let _ = writeln!(
            buf,
            "{} {} {} {} {} {} {} {}",
            glyph,
            id.dark_grey(),
            "│".dark_grey(),
            name.blue(),
            "│".dark_grey(),
            state,
            "│".dark_grey(),
            image
        );

        let ports = format_ports(&c.ports);
        if !ports.is_empty() {
            let _ = writeln!(buf, "{}", format!("  ↪ Ports: {}", ports).dark_grey());
        }
        let _ = writeln!(buf, "{}", format!("  ⏱ {}", c.status).dark_grey());
        let _ = writeln!(buf);
    }

    let running = containers.iter().filter(|c| c.is_running()).count();
    let _ = write!(buf, "Total: {} containers", containers.len());
    if running > 0 {
        let _ = write!(buf, "{}", format!(" ({} running)", running).green().bold());
    }
    let _ = writeln!(buf);

    buf
}

fn render_images(images: &[ImageSummary]) -> String {
    let mut buf = String::new();

    if images.is_empty() {
        let _ = writeln!(buf, "{}", "No images found".dark_grey());
        return buf;
    }

    let _ = writeln!(buf);
    let _ = writeln!(buf, "{}", image_border('╭', '╮').cyan());
    let _ = writeln!(
        buf,
        "{} {} {}",
        "│".cyan(),
        format!("{:<width$}", "IMAGES", width = IMAGE_INNER_WIDTH).cyan().bold(),
        "│".cyan()
    );
    let _ = writeln!(buf, "{}", image_border('├', '┤').cyan());

    let mut total_size: i64 = 0;
    for (i, img) in images.iter().enumerate() {
        let repo = format!(
            "{:<width$}",
            truncate(img.reference(), REPO_WIDTH),
            width = REPO_WIDTH
        );
        let size = format!(
            "{:<width$}",
            format_bytes(img.size.max(0) as u64),
            width = SIZE_WIDTH
        );
        let id = format!("{:<width$}", img.short_id(), width = ID_WIDTH);

        let _ = writeln!(
            buf,
            "{} {} {} {} {} {} {}",
            "│".cyan(),
            repo.blue(),
            "│".cyan(),
            size.green(),
            "│".cyan(),
            id.dark_grey(),
            "│".cyan()
        );

        let created = format!(
            "{:<width$}",
            format!("  ⏱ Created: {}", format_age(img.created)),
            width = IMAGE_INNER_WIDTH
        );
        let _ = writeln!(
            buf,
            "{} {} {}",
            "│".cyan(),
            created.dark_grey(),
            "│".cyan()
        );

        if i + 1 < images.len() {
            let _ = writeln!(buf, "{}", image_border('├', '┤').cyan());
        }

        total_size += img.size.max(0);
    }

    let _ = writeln!(buf, "{}", image_border('╰', '╯').cyan());
    let _ = writeln!(buf);

    let _ = write!(buf, "Total: {} images", images.len());
    if total_size > 0 {
        let _ = write!(
            buf,
            "{}",
            format!(" (Total size: {})", format_bytes(total_size as u64))
                .green()
                .bold()
        );
    }
    let _ = writeln!(buf);

    buf
}

fn image_border(left: char, right: char) -> String {
    format!(
        "{}{}{}",
        left,
        "─".repeat(IMAGE_INNER_WIDTH + 2),
        right
    )
}

fn state_glyph(state: &str) -> &'static str {
    match state {
        "running" => "●",
        "exited" => "○",
        "paused" => "⏸",
        _ => "✖",
    }
}

fn styled_by_state(text: String, state: &str) -> StyledContent<String> {
    match state {
        "running" => text.green().bold(),
        "exited" => text.dark_grey(),
        "paused" => text.yellow().bold(),
        _ => text.red().bold(),
    }
}
