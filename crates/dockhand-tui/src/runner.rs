//! Main TUI runner - entry points and event loop
//!
//! Contains the core application lifecycle:
//! - `run_dashboard`: full dashboard entry point
//! - `run_log_viewer`: standalone log viewer for `dockhand logs`
//! - `run_loop`: main event loop processing terminal and background events

use tokio::sync::mpsc;

use dockhand_app::message::Message;
use dockhand_app::state::AppState;
use dockhand_app::{process_message, signals, Settings};
use dockhand_client::DockerClient;
use dockhand_core::prelude::*;

use super::{event, render, terminal};

/// Run the full dashboard
pub async fn run_dashboard(client: DockerClient, settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    // Create initial state with settings
    let mut state = AppState::new(settings);

    // Create unified message channel (for signal handler, background tasks)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    // Kick off the first load before the first frame
    process_message(&mut state, Message::Refresh, &client, &msg_tx);

    // Run the main loop
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &client);

    // Stop any log stream still attached so its reader task exits
    if let Some(session) = state.logs.as_mut() {
        session.cancel_stream();
    }

    // Restore terminal
    ratatui::restore();

    result
}

/// Run the log viewer alone, without the dashboard around it
///
/// Used by `dockhand logs <container>`. Closing the viewer quits the
/// program instead of returning to a resource list.
pub async fn run_log_viewer(
    client: DockerClient,
    settings: Settings,
    container: String,
    tail: u32,
    follow: bool,
) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::init();

    let mut state = AppState::new(settings);
    state.standalone_logs = true;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    signals::spawn_signal_handler(msg_tx.clone());

    // The user-supplied reference serves as id and title; the daemon
    // resolves names and short ids the same way it does for full ids
    process_message(
        &mut state,
        Message::OpenLogs {
            id: container.clone(),
            name: container,
            tail,
            follow,
        },
        &client,
        &msg_tx,
    );

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &client);

    if let Some(session) = state.logs.as_mut() {
        session.cancel_stream();
    }

    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: &DockerClient,
) -> Result<()> {
    while !state.should_quit {
        // Process messages from background tasks (loads, log reader, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, client, &msg_tx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, client, &msg_tx);
        }
    }

    Ok(())
}
