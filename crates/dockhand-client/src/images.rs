//! Image operations

use dockhand_core::prelude::*;

use crate::http::DockerClient;
use crate::models::{ImageSummary, PruneReport};

impl DockerClient {
    pub async fn list_images(&self) -> Result<Vec<ImageSummary>> {
        self.get_json("/images/json").await
    }

    /// Remove an image by id or reference; `force` unties it from
    /// stopped containers and extra tags.
    pub async fn remove_image(&self, id: &str, force: bool) -> Result<()> {
        info!(image = id, force, "removing image");
        self.delete_unary(&format!("/images/{}?force={}", id, force))
            .await
    }

    /// Remove dangling images
    pub async fn prune_images(&self) -> Result<PruneReport> {
        info!("pruning dangling images");
        self.post_json("/images/prune").await
    }
}
