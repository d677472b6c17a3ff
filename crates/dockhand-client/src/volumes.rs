//! Volume operations

use dockhand_core::prelude::*;

use crate::http::DockerClient;
use crate::models::{PruneReport, VolumeSummary};

impl DockerClient {
    pub async fn list_volumes(&self) -> Result<Vec<VolumeSummary>> {
        let response: crate::models::VolumeListResponse = self.get_json("/volumes").await?;
        if let Some(warnings) = &response.warnings {
            for warning in warnings {
                warn!("volume list warning: {}", warning);
            }
        }
        Ok(response.volumes)
    }

    pub async fn remove_volume(&self, name: &str, force: bool) -> Result<()> {
        info!(volume = name, force, "removing volume");
        self.delete_unary(&format!("/volumes/{}?force={}", name, force))
            .await
    }

    /// Remove volumes not used by any container
    pub async fn prune_volumes(&self) -> Result<PruneReport> {
        info!("pruning unused volumes");
        self.post_json("/volumes/prune").await
    }
}
