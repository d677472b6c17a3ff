//! Wire models for the Engine API
//!
//! Deserialization is deliberately lenient: every struct takes
//! `#[serde(default)]` so a daemon speaking a newer or older API version
//! still decodes. Top-level keys are PascalCase except stats, which the
//! daemon reports in snake_case.

use std::collections::HashMap;

use serde::Deserialize;

/// One entry from `GET /containers/json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContainerSummary {
    pub id: String,
    pub names: Vec<String>,
    pub image: String,
    #[serde(rename = "ImageID")]
    pub image_id: String,
    pub command: String,
    /// Creation time as a unix timestamp
    pub created: i64,
    /// Lifecycle state: `created`, `running`, `paused`, `exited`, ...
    pub state: String,
    /// Human status line, e.g. `Up 2 hours` or `Exited (0) 3 days ago`
    pub status: String,
    pub ports: Vec<PortBinding>,
    pub labels: HashMap<String, String>,
}

impl ContainerSummary {
    /// First name with the daemon's leading slash stripped
    pub fn display_name(&self) -> &str {
        self.names
            .first()
            .map(|n| n.strip_prefix('/').unwrap_or(n))
            .unwrap_or(&self.id)
    }

    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }

    pub fn is_running(&self) -> bool {
        self.state.eq_ignore_ascii_case("running")
    }
}

/// Published or exposed port on a container
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PortBinding {
    #[serde(rename = "IP")]
    pub ip: Option<String>,
    pub private_port: u16,
    pub public_port: Option<u16>,
    #[serde(rename = "Type")]
    pub protocol: String,
}

/// `GET /containers/{id}/json`, reduced to the fields the UI needs
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContainerDetails {
    pub id: String,
    pub name: String,
    pub created: String,
    pub state: ContainerState,
    pub config: ContainerConfig,
    pub restart_count: i64,
}

impl ContainerDetails {
    pub fn display_name(&self) -> &str {
        self.name.strip_prefix('/').unwrap_or(&self.name)
    }

    /// TTY containers multiplex nothing; their log stream is raw bytes
    pub fn is_tty(&self) -> bool {
        self.config.tty
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContainerState {
    pub status: String,
    pub running: bool,
    pub exit_code: i64,
    pub started_at: String,
    pub finished_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContainerConfig {
    pub image: String,
    pub tty: bool,
    pub cmd: Option<Vec<String>>,
    pub env: Option<Vec<String>>,
}

/// One entry from `GET /images/json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImageSummary {
    pub id: String,
    pub parent_id: String,
    /// `None` or empty for dangling images
    pub repo_tags: Option<Vec<String>>,
    pub created: i64,
    pub size: i64,
    pub containers: i64,
}

impl ImageSummary {
    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }

    /// First tag, or `<none>:<none>` for dangling images
    pub fn reference(&self) -> &str {
        self.repo_tags
            .as_deref()
            .and_then(|tags| tags.first())
            .map(String::as_str)
            .unwrap_or("<none>:<none>")
    }
}

/// `GET /volumes` wraps the list in an envelope
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VolumeListResponse {
    pub volumes: Vec<VolumeSummary>,
    pub warnings: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VolumeSummary {
    pub name: String,
    pub driver: String,
    pub mountpoint: String,
    pub created_at: String,
    pub scope: String,
    pub labels: Option<HashMap<String, String>>,
}

/// One entry from `GET /networks`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkSummary {
    pub id: String,
    pub name: String,
    pub driver: String,
    pub scope: String,
    pub internal: bool,
    pub attachable: bool,
    #[serde(rename = "EnableIPv6")]
    pub enable_ipv6: bool,
    pub created: String,
}

impl NetworkSummary {
    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }
}

/// `GET /containers/{id}/stats?stream=false`; snake_case on the wire
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContainerStats {
    pub cpu_stats: CpuStats,
    pub precpu_stats: CpuStats,
    pub memory_stats: MemoryStats,
}

impl ContainerStats {
    /// CPU usage as a percentage of the host, the way `docker stats`
    /// computes it: usage delta over system delta, scaled by CPU count.
    pub fn cpu_percent(&self) -> f64 {
        let cpu_delta = self
            .cpu_stats
            .cpu_usage
            .total_usage
            .saturating_sub(self.precpu_stats.cpu_usage.total_usage) as f64;
        let system_delta = self
            .cpu_stats
            .system_cpu_usage
            .saturating_sub(self.precpu_stats.system_cpu_usage) as f64;
        if system_delta <= 0.0 || cpu_delta <= 0.0 {
            return 0.0;
        }
        let cpus = if self.cpu_stats.online_cpus > 0 {
            self.cpu_stats.online_cpus as f64
        } else {
            1.0
        };
        cpu_delta / system_delta * cpus * 100.0
    }

    pub fn memory_usage(&self) -> u64 {
        self.memory_stats.usage
    }

    pub fn memory_limit(&self) -> u64 {
        self.memory_stats.limit
    }

    pub fn memory_percent(&self) -> f64 {
        if self.memory_stats.limit == 0 {
            return 0.0;
        }
        self.memory_stats.usage as f64 / self.memory_stats.limit as f64 * 100.0
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CpuStats {
    pub cpu_usage: CpuUsage,
    pub system_cpu_usage: u64,
    pub online_cpus: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CpuUsage {
    pub total_usage: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MemoryStats {
    pub usage: u64,
    pub limit: u64,
}

/// `GET /info`, reduced to the dashboard fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SystemInfo {
    pub containers: i64,
    pub containers_running: i64,
    pub containers_paused: i64,
    pub containers_stopped: i64,
    pub images: i64,
    pub server_version: String,
    pub operating_system: String,
    #[serde(rename = "NCPU")]
    pub ncpu: i64,
    pub mem_total: i64,
    pub name: String,
}

/// `GET /version`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VersionInfo {
    pub version: String,
    pub api_version: String,
    pub os: String,
    pub arch: String,
}

/// Result of a prune call; the daemon omits keys it has nothing for
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PruneReport {
    pub containers_deleted: Option<Vec<String>>,
    pub images_deleted: Option<Vec<ImageDeleteItem>>,
    pub volumes_deleted: Option<Vec<String>>,
    pub networks_deleted: Option<Vec<String>>,
    pub space_reclaimed: u64,
}

/// One untag or delete step from an image prune
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImageDeleteItem {
    pub untagged: Option<String>,
    pub deleted: Option<String>,
}

impl PruneReport {
    pub fn deleted_count(&self) -> usize {
        self.containers_deleted.as_ref().map_or(0, Vec::len)
            + self.images_deleted.as_ref().map_or(0, Vec::len)
            + self.volumes_deleted.as_ref().map_or(0, Vec::len)
            + self.networks_deleted.as_ref().map_or(0, Vec::len)
    }
}

/// Strip a `sha256:` prefix and truncate to the familiar 12 characters
pub fn short_id(id: &str) -> &str {
    let id = id.strip_prefix("sha256:").unwrap_or(id);
    if id.len() > 12 {
        &id[..12]
    } else {
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_container_summary_deserializes() {
        let value = json!({
            "Id": "8dfafdbc3a40b2b5c6e8a9f1e2d3c4b5a69788f1e2d3c4b5a69788f1e2d3c4b5",
            "Names": ["/web"],
            "Image": "nginx:latest",
            "ImageID": "sha256:4bb46517cac3",
            "Command": "nginx -g 'daemon off;'",
            "Created": 1700000000,
            "State": "running",
            "Status": "Up 2 hours",
            "Ports": [
                {"IP": "0.0.0.0", "PrivatePort": 80, "PublicPort": 8080, "Type": "tcp"}
            ],
            "Labels": {"app": "web"}
        });
        let container: ContainerSummary = serde_json::from_value(value).unwrap();
        assert_eq!(container.display_name(), "web");
        assert_eq!(container.short_id(), "8dfafdbc3a40");
        assert!(container.is_running());
        assert_eq!(container.ports[0].public_port, Some(8080));
        assert_eq!(container.ports[0].protocol, "tcp");
    }

    #[test]
    fn test_container_summary_tolerates_missing_fields() {
        let value = json!({"Id": "abc", "State": "exited"});
        let container: ContainerSummary = serde_json::from_value(value).unwrap();
        assert_eq!(container.display_name(), "abc");
        assert!(!container.is_running());
        assert!(container.ports.is_empty());
    }

    #[test]
    fn test_image_reference_handles_dangling() {
        let tagged: ImageSummary = serde_json::from_value(json!({
            "Id": "sha256:4bb46517cac397bdb0bab6eba09b0e1f8e90ddd17cf99662997c3253531136f8",
            "RepoTags": ["nginx:latest", "nginx:1.25"],
            "Created": 1700000000,
            "Size": 187654321
        }))
        .unwrap();
        assert_eq!(tagged.reference(), "nginx:latest");
        assert_eq!(tagged.short_id(), "4bb46517cac3");

        let dangling: ImageSummary =
            serde_json::from_value(json!({"Id": "sha256:deadbeef", "RepoTags": null})).unwrap();
        assert_eq!(dangling.reference(), "<none>:<none>");
    }

    #[test]
    fn test_volume_list_envelope() {
        let value = json!({
            "Volumes": [
                {"Name": "pgdata", "Driver": "local", "Mountpoint": "/var/lib/docker/volumes/pgdata/_data", "CreatedAt": "2024-01-01T00:00:00Z", "Scope": "local"}
            ],
            "Warnings": null
        });
        let response: VolumeListResponse = serde_json::from_value(value).unwrap();
        assert_eq!(response.volumes.len(), 1);
        assert_eq!(response.volumes[0].name, "pgdata");
    }

    #[test]
    fn test_inspect_reports_tty() {
        let value = json!({
            "Id": "abc",
            "Name": "/web",
            "State": {"Status": "running", "Running": true},
            "Config": {"Image": "nginx", "Tty": true}
        });
        let details: ContainerDetails = serde_json::from_value(value).unwrap();
        assert!(details.is_tty());
        assert_eq!(details.display_name(), "web");
    }

    #[test]
    fn test_cpu_percent_math() {
        let value = json!({
            "cpu_stats": {
                "cpu_usage": {"total_usage": 2_000_000u64},
                "system_cpu_usage": 20_000_000u64,
                "online_cpus": 4
            },
            "precpu_stats": {
                "cpu_usage": {"total_usage": 1_000_000u64},
                "system_cpu_usage": 10_000_000u64
            },
            "memory_stats": {"usage": 512, "limit": 2048}
        });
        let stats: ContainerStats = serde_json::from_value(value).unwrap();
        // delta 1M over system delta 10M on 4 CPUs = 40%
        assert!((stats.cpu_percent() - 40.0).abs() < f64::EPSILON);
        assert!((stats.memory_percent() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cpu_percent_guards_zero_delta() {
        let stats = ContainerStats::default();
        assert_eq!(stats.cpu_percent(), 0.0);
        assert_eq!(stats.memory_percent(), 0.0);
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("sha256:4bb46517cac397bdb0bab6eba0"), "4bb46517cac3");
        assert_eq!(short_id("abc"), "abc");
    }
}
