//! # dockhand-core - Core Domain Types
//!
//! Foundation crate for dockhand. Provides the log wire decoder, the capped
//! log buffer, search state, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** and performs no I/O beyond
//! log-file setup -- no sockets, no terminal.
//!
//! ## Public API
//!
//! ### Log core (`log`)
//! - [`FrameDecoder`] - Incremental demultiplexer for the Engine's 8-byte-header
//!   log framing, with newline fallback for TTY streams
//! - [`LogRecord`], [`StreamKind`] - One decoded line and its substream tag
//! - [`LogBuffer`] - Capacity-capped line storage with front eviction
//! - [`SearchState`], [`SearchMatch`] - Case-insensitive regex search with
//!   span tracking and wrapping next/previous navigation
//! - [`ActiveView`], [`ViewLine`] - The filtered/highlighted projection the
//!   viewer renders
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use dockhand_core::prelude::*;
//! ```

pub mod error;
pub mod log;
pub mod logging;
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use log::{
    decode_all, ActiveView, FrameDecoder, LogBuffer, LogRecord, SearchMatch, SearchState,
    StreamKind, ViewLine, DEFAULT_LOG_CAPACITY, HEADER_LEN,
};
