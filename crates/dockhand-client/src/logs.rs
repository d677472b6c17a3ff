//! Streaming log endpoint
//!
//! Unlike the unary calls, `/containers/{id}/logs` with `follow=true` never
//! finishes on its own; the caller pulls chunks and closes the stream when
//! it is done. Chunks arrive in the daemon's multiplexed framing (or raw
//! bytes for TTY containers) and are decoded by the caller.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::{Method, Request};
use tokio::task::JoinHandle;

use dockhand_core::prelude::*;

use crate::http::{error_for_status, DockerClient};

/// Options for a log fetch
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Keep the stream open and receive new output as it is written
    pub follow: bool,
    /// Number of trailing lines to start from, or `all`
    pub tail: String,
    pub timestamps: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            follow: true,
            tail: "500".to_string(),
            timestamps: false,
        }
    }
}

impl LogOptions {
    pub fn tail_lines(mut self, lines: usize) -> Self {
        self.tail = lines.to_string();
        self
    }

    pub fn follow(mut self, follow: bool) -> Self {
        self.follow = follow;
        self
    }
}

/// Open handle to a container's log stream.
///
/// Dropping the handle tears the connection down, so an abandoned
/// `follow` stream does not leak a task.
pub struct LogStream {
    body: Option<Incoming>,
    conn: Option<JoinHandle<()>>,
}

impl LogStream {
    /// Pull the next chunk of raw bytes.
    ///
    /// `Ok(None)` means the daemon closed the stream (container exited, or
    /// a non-follow fetch is exhausted). After the first `None` or error
    /// the stream is closed and every later call returns `Ok(None)`.
    pub async fn next_chunk(&mut self) -> Result<Option<Bytes>> {
        let body = match self.body.as_mut() {
            Some(body) => body,
            None => return Ok(None),
        };

        loop {
            match body.frame().await {
                Some(Ok(frame)) => match frame.into_data() {
                    Ok(data) if data.is_empty() => continue,
                    Ok(data) => return Ok(Some(data)),
                    // trailers carry no log bytes
                    Err(_) => continue,
                },
                Some(Err(e)) => {
                    self.close();
                    return Err(Error::stream_read(e.to_string()));
                }
                None => {
                    self.close();
                    return Ok(None);
                }
            }
        }
    }

    /// Tear down the stream; safe to call more than once
    pub fn close(&mut self) {
        self.body = None;
        if let Some(task) = self.conn.take() {
            task.abort();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.body.is_none()
    }
}

impl Drop for LogStream {
    fn drop(&mut self) {
        self.close();
    }
}

impl DockerClient {
    /// Open the log stream for a container.
    ///
    /// Returns an error before handing back the stream if the daemon
    /// rejects the request, e.g. for an unknown container.
    pub async fn open_log_stream(
        &self,
        container: &str,
        options: &LogOptions,
    ) -> Result<LogStream> {
        let path = log_path(container, options);
        let (mut sender, conn) = self.connect().await?;

        let request = Request::builder()
            .method(Method::GET)
            .uri(format!("http://localhost{}", path))
            .header("Host", "localhost")
            .body(Full::new(Bytes::new()))
            .map_err(|e| Error::connection(format!("failed to build request: {}", e)))?;

        let response = sender
            .send_request(request)
            .await
            .map_err(|e| Error::connection(format!("request to {} failed: {}", path, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .into_body()
                .collect()
                .await
                .map(|b| b.to_bytes())
                .unwrap_or_default();
            conn.abort();
            return Err(error_for_status(status, &body));
        }

        debug!(container, follow = options.follow, "log stream opened");
        Ok(LogStream {
            body: Some(response.into_body()),
            conn: Some(conn),
        })
    }
}

fn log_path(container: &str, options: &LogOptions) -> String {
    format!(
        "/containers/{}/logs?stdout=true&stderr=true&follow={}&tail={}&timestamps={}",
        container, options.follow, options.tail, options.timestamps
    )
}
