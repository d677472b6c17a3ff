//! Application error types shared by every dockhand crate

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Runtime Daemon Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Cannot connect to the container runtime: {message}")]
    Connection { message: String },

    #[error("No such object: {resource}")]
    NotFound { resource: String },

    #[error("Runtime API error (status {status}): {message}")]
    Runtime { status: u16, message: String },

    // ─────────────────────────────────────────────────────────────
    // Log Streaming Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Log stream read failed: {message}")]
    StreamRead { message: String },

    #[error("Log frame decode error: {message}")]
    Decode { message: String },

    // ─────────────────────────────────────────────────────────────
    // Search Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid search pattern: {message}")]
    PatternCompile { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn runtime(status: u16, message: impl Into<String>) -> Self {
        Self::Runtime {
            status,
            message: message.into(),
        }
    }

    pub fn stream_read(message: impl Into<String>) -> Self {
        Self::StreamRead {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn pattern_compile(message: impl Into<String>) -> Self {
        Self::PatternCompile {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors degrade the current session (stop reads, keep the
    /// already-buffered content, let the user retry a search) instead of
    /// tearing it down.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::StreamRead { .. } | Error::Decode { .. } | Error::PatternCompile { .. }
        )
    }

    /// Check if this error should prevent a session from starting at all
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Connection { .. } | Error::NotFound { .. } | Error::Terminal { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
