//! dockhand - a friendlier Docker CLI
//!
//! Binary entry point. Routes between the pretty printers, the dashboard
//! and log viewer TUIs, and pass-through to the real docker binary.

mod cli;
mod pretty;

use clap::Parser;
use tracing::error;

use cli::{Cli, Command};
use dockhand_app::load_settings;
use dockhand_client::DockerClient;
use dockhand_core::{logging, Error, Result};

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // Pass-through runs before any of our own machinery comes up:
    // no logging, no config, no socket - just docker with the user's
    // arguments and its exit code
    if let Some(Command::Docker(argv)) = args.command {
        std::process::exit(passthrough(&argv));
    }

    if let Err(e) = run(args.command).await {
        error!("dockhand failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Option<Command>) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file; stdout belongs to the listings and the TUI
    logging::init()?;

    let settings = load_settings();
    let client = match settings.socket_path.as_deref() {
        Some(path) => DockerClient::with_socket(path),
        None => DockerClient::new(),
    };

    match command {
        None => dockhand_tui::run_dashboard(client, settings).await,
        Some(Command::Ps { all }) => pretty::print_containers(&client, all).await,
        Some(Command::Images) => pretty::print_images(&client).await,
        Some(Command::Logs {
            follow,
            tail,
            container,
        }) => dockhand_tui::run_log_viewer(client, settings, container, tail, follow).await,
        // Handled in main before run() is reached
        Some(Command::Docker(_)) => Ok(()),
    }
}

/// Exec the real docker binary with the user's arguments untouched.
///
/// Stdio is inherited so interactive commands (`docker exec -it`, ...)
/// behave exactly as if docker had been invoked directly. Returns the
/// child's exit code unchanged; wrapper failures report on stderr and
/// map to exit code 1.
fn passthrough(argv: &[String]) -> i32 {
    let docker = match which::which("docker") {
        Ok(path) => path,
        Err(_) => {
            eprintln!("Error: docker binary not found in PATH");
            return 1;
        }
    };

    match std::process::Command::new(docker).args(argv).status() {
        Ok(status) => status.code().unwrap_or(1),
        Err(e) => {
            eprintln!("Error running docker command: {e}");
            1
        }
    }
}
