//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! `update()` never touches the socket. Every Engine call runs in a
//! spawned task that reports back through the message channel; a closed
//! channel just ends the task.

use tokio::sync::mpsc;

use dockhand_client::DockerClient;
use dockhand_core::prelude::*;

use crate::handler::{Task, UpdateAction};
use crate::message::Message;
use crate::state::View;

pub mod logs;

pub use logs::spawn_log_reader;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, client: DockerClient, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::SpawnTask(task) => {
            tokio::spawn(async move {
                execute_task(task, client, msg_tx).await;
            });
        }

        UpdateAction::OpenLogStream {
            id,
            name,
            tail,
            follow,
        } => {
            logs::spawn_log_reader(client, msg_tx, id, name, tail, follow);
        }
    }
}

/// Run one Engine call and report the outcome as messages
pub async fn execute_task(task: Task, client: DockerClient, msg_tx: mpsc::Sender<Message>) {
    match task {
        // ─── Lists ───
        Task::ListContainers { all } => match client.list_containers(all).await {
            Ok(containers) => {
                let _ = msg_tx.send(Message::ContainersLoaded { containers }).await;
            }
            Err(e) => send_load_failure(&msg_tx, View::Containers, e).await,
        },

        Task::ListImages => match client.list_images().await {
            Ok(images) => {
                let _ = msg_tx.send(Message::ImagesLoaded { images }).await;
            }
            Err(e) => send_load_failure(&msg_tx, View::Images, e).await,
        },

        Task::ListVolumes => match client.list_volumes().await {
            Ok(volumes) => {
                let _ = msg_tx.send(Message::VolumesLoaded { volumes }).await;
            }
            Err(e) => send_load_failure(&msg_tx, View::Volumes, e).await,
        },

        Task::ListNetworks => match client.list_networks().await {
            Ok(networks) => {
                let _ = msg_tx.send(Message::NetworksLoaded { networks }).await;
            }
            Err(e) => send_load_failure(&msg_tx, View::Networks, e).await,
        },

        Task::LoadSystem => match tokio::try_join!(client.info(), client.version()) {
            Ok((info, version)) => {
                let _ = msg_tx
                    .send(Message::SystemLoaded {
                        info: Box::new(info),
                        version: Box::new(version),
                    })
                    .await;
            }
            Err(e) => send_load_failure(&msg_tx, View::Dashboard, e).await,
        },

        Task::InspectContainer { id } => match client.inspect_container(&id).await {
            Ok(details) => {
                let _ = msg_tx
                    .send(Message::ContainerInspected {
                        details: Box::new(details),
                    })
                    .await;
            }
            Err(e) => send_failed(&msg_tx, "Inspect", e).await,
        },

        Task::SampleStats { id } => match client.container_stats(&id).await {
            Ok(stats) => {
                let _ = msg_tx
                    .send(Message::StatsSampled {
                        container_id: id,
                        stats: Box::new(stats),
                    })
                    .await;
            }
            // Stats are opportunistic; a container stopping mid-sample is
            // not worth an error banner
            Err(e) => debug!("stats sample for {} failed: {}", id, e),
        },

        // ─── Container actions ───
        Task::StartContainer { id, name } => match client.start_container(&id).await {
            Ok(()) => send_completed(&msg_tx, "Started", &name).await,
            Err(e) => send_failed(&msg_tx, &format!("Start {name}"), e).await,
        },

        Task::StopContainer { id, name } => match client.stop_container(&id).await {
            Ok(()) => send_completed(&msg_tx, "Stopped", &name).await,
            Err(e) => send_failed(&msg_tx, &format!("Stop {name}"), e).await,
        },

        Task::RestartContainer { id, name } => match client.restart_container(&id).await {
            Ok(()) => send_completed(&msg_tx, "Restarted", &name).await,
            Err(e) => send_failed(&msg_tx, &format!("Restart {name}"), e).await,
        },

        Task::RemoveContainer { id, name } => match client.remove_container(&id, false).await {
            Ok(()) => send_completed(&msg_tx, "Removed", &name).await,
            Err(e) => send_failed(&msg_tx, &format!("Remove {name}"), e).await,
        },

        // ─── Image / volume / network actions ───
        Task::RemoveImage { id, name } => match client.remove_image(&id, false).await {
            Ok(()) => send_completed(&msg_tx, "Removed", &name).await,
            Err(e) => send_failed(&msg_tx, &format!("Remove {name}"), e).await,
        },

        Task::RemoveVolume { name } => match client.remove_volume(&name, false).await {
            Ok(()) => send_completed(&msg_tx, "Removed", &name).await,
            Err(e) => send_failed(&msg_tx, &format!("Remove {name}"), e).await,
        },

        Task::RemoveNetwork { id, name } => match client.remove_network(&id).await {
            Ok(()) => send_completed(&msg_tx, "Removed", &name).await,
            Err(e) => send_failed(&msg_tx, &format!("Remove {name}"), e).await,
        },

        // ─── Prunes ───
        Task::PruneContainers => match client.prune_containers().await {
            Ok(report) => send_pruned(&msg_tx, "containers", report).await,
            Err(e) => send_failed(&msg_tx, "Prune containers", e).await,
        },

        Task::PruneImages => match client.prune_images().await {
            Ok(report) => send_pruned(&msg_tx, "images", report).await,
            Err(e) => send_failed(&msg_tx, "Prune images", e).await,
        },

        Task::PruneVolumes => match client.prune_volumes().await {
            Ok(report) => send_pruned(&msg_tx, "volumes", report).await,
            Err(e) => send_failed(&msg_tx, "Prune volumes", e).await,
        },

        Task::PruneNetworks => match client.prune_networks().await {
            Ok(report) => send_pruned(&msg_tx, "networks", report).await,
            Err(e) => send_failed(&msg_tx, "Prune networks", e).await,
        },
    }
}

async fn send_load_failure(msg_tx: &mpsc::Sender<Message>, view: View, error: Error) {
    let unreachable = matches!(error, Error::Connection { .. });
    let _ = msg_tx
        .send(Message::ViewLoadFailed {
            view,
            error: error.to_string(),
            unreachable,
        })
        .await;
}

async fn send_completed(msg_tx: &mpsc::Sender<Message>, verb: &str, target: &str) {
    let _ = msg_tx
        .send(Message::ActionCompleted {
            verb: verb.to_string(),
            target: target.to_string(),
        })
        .await;
}

async fn send_failed(msg_tx: &mpsc::Sender<Message>, action: &str, error: Error) {
    let _ = msg_tx
        .send(Message::ActionFailed {
            action: action.to_string(),
            error: error.to_string(),
        })
        .await;
}

async fn send_pruned(
    msg_tx: &mpsc::Sender<Message>,
    what: &str,
    report: dockhand_client::PruneReport,
) {
    let _ = msg_tx
        .send(Message::PruneCompleted {
            what: what.to_string(),
            report,
        })
        .await;
}
