//! Network operations

use dockhand_core::prelude::*;

use crate::http::DockerClient;
use crate::models::{NetworkSummary, PruneReport};

impl DockerClient {
    pub async fn list_networks(&self) -> Result<Vec<NetworkSummary>> {
        self.get_json("/networks").await
    }

    pub async fn remove_network(&self, id: &str) -> Result<()> {
        info!(network = id, "removing network");
        self.delete_unary(&format!("/networks/{}", id)).await
    }

    /// Remove networks not used by any container
    pub async fn prune_networks(&self) -> Result<PruneReport> {
        info!("pruning unused networks");
        self.post_json("/networks/prune").await
    }
}
