//! HTTP plumbing for the Engine API over a Unix socket
//!
//! Each request opens its own connection: connect, HTTP/1 handshake, drive
//! the connection from a spawned task, send, collect. The daemon closes the
//! socket after unary responses, so there is nothing to pool.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::client::conn::http1;
use hyper::{Method, Request, StatusCode};
use hyper_util::rt::TokioIo;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::net::UnixStream;
use tokio::task::JoinHandle;

use dockhand_core::prelude::*;

/// Default socket path for the Docker daemon
pub const DEFAULT_SOCKET_PATH: &str = "/var/run/docker.sock";

/// Client for a Docker-compatible Engine API on the local machine.
///
/// Cheap to clone; holds only the socket path.
#[derive(Debug, Clone)]
pub struct DockerClient {
    socket_path: PathBuf,
}

impl Default for DockerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DockerClient {
    /// Create a client against the default socket, honoring a
    /// `DOCKER_HOST=unix://...` override.
    pub fn new() -> Self {
        Self {
            socket_path: socket_from_env(),
        }
    }

    /// Create a client against a specific socket path
    pub fn with_socket(path: impl AsRef<Path>) -> Self {
        Self {
            socket_path: path.as_ref().to_path_buf(),
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Connect and hand back a request sender plus the task driving the
    /// connection. Unary callers drop the handle; streaming callers keep
    /// it so they can abort a never-ending `follow` connection.
    pub(crate) async fn connect(
        &self,
    ) -> Result<(http1::SendRequest<Full<Bytes>>, JoinHandle<()>)> {
        let stream = UnixStream::connect(&self.socket_path).await.map_err(|e| {
            Error::connection(format!("{}: {}", self.socket_path.display(), e))
        })?;
        let io = TokioIo::new(stream);

        let (sender, conn) = http1::handshake(io)
            .await
            .map_err(|e| Error::connection(format!("HTTP handshake failed: {}", e)))?;

        let task = tokio::spawn(async move {
            if let Err(e) = conn.await {
                debug!("engine connection closed: {}", e);
            }
        });

        Ok((sender, task))
    }

    /// Perform one unary request, returning the status and collected body
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<(StatusCode, Bytes)> {
        let (mut sender, _conn) = self.connect().await?;

        let builder = Request::builder()
            .method(method)
            .uri(format!("http://localhost{}", path))
            .header("Host", "localhost");
        let request = match body {
            Some(bytes) => builder
                .header("Content-Type", "application/json")
                .header("Content-Length", bytes.len())
                .body(Full::new(Bytes::from(bytes))),
            None => builder.body(Full::new(Bytes::new())),
        }
        .map_err(|e| Error::connection(format!("failed to build request: {}", e)))?;

        let response = sender
            .send_request(request)
            .await
            .map_err(|e| Error::connection(format!("request to {} failed: {}", path, e)))?;

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::connection(format!("failed to read response: {}", e)))?
            .to_bytes();

        Ok((status, body))
    }

    /// GET a JSON-decoded response
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let (status, body) = self.request(Method::GET, path, None).await?;
        if !status.is_success() {
            return Err(error_for_status(status, &body));
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// POST expecting a JSON-decoded response (prune endpoints)
    pub(crate) async fn post_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let (status, body) = self.request(Method::POST, path, None).await?;
        if !status.is_success() {
            return Err(error_for_status(status, &body));
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// POST expecting no body.
    ///
    /// 304 Not Modified means the container is already in the requested
    /// state (start on a running container, stop on a stopped one); the
    /// daemon treats that as success and so do we.
    pub(crate) async fn post_unary(&self, path: &str) -> Result<()> {
        let (status, body) = self.request(Method::POST, path, None).await?;
        if status.is_success() || status == StatusCode::NOT_MODIFIED {
            return Ok(());
        }
        Err(error_for_status(status, &body))
    }

    /// DELETE expecting no body
    pub(crate) async fn delete_unary(&self, path: &str) -> Result<()> {
        let (status, body) = self.request(Method::DELETE, path, None).await?;
        if status.is_success() {
            return Ok(());
        }
        Err(error_for_status(status, &body))
    }
}

/// Daemon error payload: `{"message": "No such container: web"}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map a non-success response to the error taxonomy
pub(crate) fn error_for_status(status: StatusCode, body: &[u8]) -> Error {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| String::from_utf8_lossy(body).trim().to_string());

    match status {
        StatusCode::NOT_FOUND => {
            if message.is_empty() {
                Error::not_found("object")
            } else {
                Error::not_found(message)
            }
        }
        _ => Error::runtime(status.as_u16(), message),
    }
}

/// Resolve the socket path, preferring a `DOCKER_HOST=unix://` override
fn socket_from_env() -> PathBuf {
    if let Ok(host) = std::env::var("DOCKER_HOST") {
        if let Some(path) = host.strip_prefix("unix://") {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }
    }
    PathBuf::from(DEFAULT_SOCKET_PATH)
}
