//! # dockhand-client - Engine API Client
//!
//! Talks to a Docker-compatible daemon over its Unix socket with plain
//! HTTP/1: container, image, volume and network operations, one-shot stats
//! sampling, and the streaming log endpoint whose multiplexed payload is
//! decoded by [`dockhand_core`].
//!
//! Depends on [`dockhand_core`] for the error taxonomy and log records.
//!
//! ## Public API
//!
//! ### Client
//! - [`DockerClient`] - One client per daemon socket; every call opens its
//!   own connection
//! - [`DEFAULT_SOCKET_PATH`] - `/var/run/docker.sock`, overridable with
//!   `DOCKER_HOST=unix://...`
//!
//! ### Log Streaming
//! - [`LogStream`] - Pull-based handle over `/containers/{id}/logs`
//! - [`LogOptions`] - Follow, tail and timestamp switches
//!
//! ### Wire Models
//! - [`ContainerSummary`], [`ContainerDetails`], [`ContainerStats`]
//! - [`ImageSummary`], [`VolumeSummary`], [`NetworkSummary`]
//! - [`SystemInfo`], [`VersionInfo`], [`PruneReport`]
//!
//! ### Formatting
//! - [`format::format_bytes`], [`format::format_age`],
//!   [`format::format_ports`] - Table cells for the CLI and the UI

pub mod containers;
pub mod format;
pub mod http;
pub mod images;
pub mod logs;
pub mod models;
pub mod networks;
pub mod system;
pub mod volumes;

pub use http::{DockerClient, DEFAULT_SOCKET_PATH};
pub use logs::{LogOptions, LogStream};
pub use models::{
    ContainerDetails, ContainerStats, ContainerSummary, ImageDeleteItem, ImageSummary,
    NetworkSummary, PortBinding, PruneReport, SystemInfo, VersionInfo, VolumeSummary,
};
