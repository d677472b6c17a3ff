//! Container operations

use dockhand_core::prelude::*;

use crate::http::DockerClient;
use crate::models::{ContainerDetails, ContainerStats, ContainerSummary, PruneReport};

/// Grace period for stop and restart before the daemon sends SIGKILL
const STOP_TIMEOUT_SECS: u32 = 10;

impl DockerClient {
    /// List containers; `all` includes stopped ones
    pub async fn list_containers(&self, all: bool) -> Result<Vec<ContainerSummary>> {
        self.get_json(&format!("/containers/json?all={}", all)).await
    }

    pub async fn inspect_container(&self, id: &str) -> Result<ContainerDetails> {
        self.get_json(&format!("/containers/{}/json", id)).await
    }

    pub async fn start_container(&self, id: &str) -> Result<()> {
        info!(container = id, "starting container");
        self.post_unary(&format!("/containers/{}/start", id)).await
    }

    pub async fn stop_container(&self, id: &str) -> Result<()> {
        info!(container = id, "stopping container");
        self.post_unary(&format!("/containers/{}/stop?t={}", id, STOP_TIMEOUT_SECS))
            .await
    }

    pub async fn restart_container(&self, id: &str) -> Result<()> {
        info!(container = id, "restarting container");
        self.post_unary(&format!(
            "/containers/{}/restart?t={}",
            id, STOP_TIMEOUT_SECS
        ))
        .await
    }

    pub async fn remove_container(&self, id: &str, force: bool) -> Result<()> {
        info!(container = id, force, "removing container");
        self.delete_unary(&format!("/containers/{}?force={}", id, force))
            .await
    }

    /// One-shot stats sample; pass `stream=false` so the daemon answers
    /// immediately instead of holding the connection open.
    pub async fn container_stats(&self, id: &str) -> Result<ContainerStats> {
        self.get_json(&format!("/containers/{}/stats?stream=false", id))
            .await
    }

    /// Remove all stopped containers
    pub async fn prune_containers(&self) -> Result<PruneReport> {
        info!("pruning stopped containers");
        self.post_json("/containers/prune").await
    }
}
