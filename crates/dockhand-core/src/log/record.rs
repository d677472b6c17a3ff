//! Decoded log line records

use chrono::{DateTime, Utc};

/// Which substream of the multiplexed log wire a frame came from.
///
/// Tag values follow the Engine's stdcopy framing: 0 stdin, 1 stdout,
/// 2 stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Stdin,
    Stdout,
    Stderr,
}

impl StreamKind {
    /// Map a wire tag byte to a stream kind. Tags above 2 are not frames.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Stdin),
            1 => Some(Self::Stdout),
            2 => Some(Self::Stderr),
            _ => None,
        }
    }

    pub fn is_stderr(&self) -> bool {
        matches!(self, Self::Stderr)
    }
}

/// One decoded log line.
///
/// Immutable after creation. The raw payload is kept alongside the decoded
/// text so the line can be re-interpreted later without re-reading the
/// stream.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Frame payload as received, transport framing already stripped
    pub raw: Vec<u8>,
    /// Lossy UTF-8 decoding of the payload, surrounding whitespace trimmed
    pub text: String,
    /// Substream the frame carried, when the wire format distinguishes one
    pub stream: Option<StreamKind>,
    /// When this record was decoded (not shown; kept for ordering/dedup)
    pub received_at: DateTime<Utc>,
}

impl LogRecord {
    /// Build a record from one frame payload.
    ///
    /// Returns `None` when the payload is empty after trimming; blank
    /// frames are dropped rather than buffered.
    pub fn from_payload(stream: Option<StreamKind>, payload: &[u8]) -> Option<Self> {
        let text = String::from_utf8_lossy(payload).trim().to_string();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            raw: payload.to_vec(),
            text,
            stream,
            received_at: Utc::now(),
        })
    }

    /// Build a record straight from text (used by tests and placeholders)
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            raw: text.as_bytes().to_vec(),
            text,
            stream: None,
            received_at: Utc::now(),
        }
    }

    pub fn is_stderr(&self) -> bool {
        self.stream.map(|s| s.is_stderr()).unwrap_or(false)
    }
}
