//! Daemon-level queries

use hyper::Method;

use dockhand_core::prelude::*;

use crate::http::DockerClient;
use crate::models::{SystemInfo, VersionInfo};

impl DockerClient {
    /// Cheap liveness probe; errors mean the daemon is unreachable
    pub async fn ping(&self) -> Result<()> {
        let (status, _body) = self.request(Method::GET, "/_ping", None).await?;
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::connection(format!(
                "daemon ping answered {}",
                status
            )))
        }
    }

    pub async fn info(&self) -> Result<SystemInfo> {
        self.get_json("/info").await
    }

    pub async fn version(&self) -> Result<VersionInfo> {
        self.get_json("/version").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping_without_daemon_is_a_connection_error() {
        let client = DockerClient::with_socket("/nonexistent/dockhand-test.sock");
        let err = client.ping().await.unwrap_err();
        assert!(matches!(err, Error::Connection { .. }));
    }
}
