//! Message processing loop
//!
//! Drives one message and all its follow-ups through `update`,
//! dispatching resulting actions to the background executors. State
//! changes stay synchronous; side effects leave through `handle_action`.

use tokio::sync::mpsc;

use dockhand_client::DockerClient;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    client: &DockerClient,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, client.clone(), msg_tx.clone());
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::state::View;

    #[tokio::test]
    async fn test_follow_ups_and_actions_flow_through_one_call() {
        let (tx, mut rx) = mpsc::channel(16);
        let client = DockerClient::with_socket("/nonexistent/dockhand-test.sock");
        let mut state = AppState::new(Settings::default());
        state.view = View::Containers;

        // ToggleAllContainers flips the flag and chains into Refresh,
        // which spawns the list task in the same call
        process_message(&mut state, Message::ToggleAllContainers, &client, &tx);
        assert!(state.all_containers);

        // The spawned task cannot reach the socket and reports back
        match rx.recv().await.unwrap() {
            Message::ViewLoadFailed {
                view, unreachable, ..
            } => {
                assert_eq!(view, View::Containers);
                assert!(unreachable);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_quit_produces_no_side_effects() {
        let (tx, mut rx) = mpsc::channel(16);
        let client = DockerClient::with_socket("/nonexistent/dockhand-test.sock");
        let mut state = AppState::new(Settings::default());

        process_message(&mut state, Message::Quit, &client, &tx);

        assert!(state.should_quit);
        drop(tx);
        assert!(rx.recv().await.is_none());
    }
}
