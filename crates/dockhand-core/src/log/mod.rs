//! Log stream decoding, buffering, and search

mod buffer;
mod demux;
mod record;
mod search;

pub use buffer::{LogBuffer, DEFAULT_LOG_CAPACITY};
pub use demux::{decode_all, FrameDecoder, HEADER_LEN};
pub use record::{LogRecord, StreamKind};
pub use search::{ActiveView, SearchMatch, SearchState, ViewLine};
