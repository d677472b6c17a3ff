//! Incremental demultiplexer for the Engine's multiplexed log wire format
//!
//! A container without a TTY produces a stream of frames, each prefixed by
//! an 8-byte header: one stream-tag byte (0 stdin, 1 stdout, 2 stderr),
//! three zero bytes, and a big-endian u32 payload length. A container
//! attached to a pseudo-TTY produces plain unframed output instead; the
//! decoder detects that case and falls back to newline splitting.

use super::record::{LogRecord, StreamKind};

/// Size of the stdcopy frame header
pub const HEADER_LEN: usize = 8;

/// How the decoder is interpreting the stream.
///
/// The mode is committed on first evidence: a complete frame locks framed
/// mode, a newline arriving before any frame ever parsed locks line mode.
/// Mixed framing mid-stream is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Undecided,
    Framed,
    Lines,
}

/// Stateful incremental frame decoder.
///
/// Feed it byte chunks as they arrive; it emits complete records and keeps
/// partial frames buffered until the rest shows up. A partial frame never
/// produces a record.
#[derive(Debug)]
pub struct FrameDecoder {
    buf: Vec<u8>,
    mode: Mode,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            mode: Mode::Undecided,
        }
    }

    /// Number of bytes buffered but not yet emitted
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    /// Consume one chunk of stream data, returning every record it completes.
    ///
    /// Frames are drained in wire order; a trailing partial frame stays
    /// buffered. If the stream turns out not to use the framed format, each
    /// batch is newline-split instead — never both for one batch.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<LogRecord> {
        self.buf.extend_from_slice(chunk);

        match self.mode {
            Mode::Framed => self.drain_frames(),
            Mode::Lines => self.drain_lines(),
            Mode::Undecided => {
                let records = self.drain_frames();
                if !records.is_empty() {
                    self.mode = Mode::Framed;
                    return records;
                }
                // The framed parse produced nothing. If what is buffered
                // cannot be the start of a frame, this is an unframed (TTY)
                // stream; otherwise keep waiting for the rest of the frame.
                if !header_plausible(&self.buf) {
                    self.mode = Mode::Lines;
                    return self.drain_lines();
                }
                records
            }
        }
    }

    /// Flush at end of stream.
    ///
    /// Any undecodable trailing remainder is emitted as a final best-effort
    /// record rather than silently dropped. An incomplete final frame still
    /// carries its header; the header is stripped and the partial payload
    /// emitted, matching what a reader sees when a stream is cut mid-frame.
    pub fn finish(&mut self) -> Vec<LogRecord> {
        let mut records = match self.mode {
            Mode::Lines => self.drain_lines(),
            Mode::Framed | Mode::Undecided => self.drain_frames(),
        };

        if self.buf.is_empty() {
            return records;
        }
        let rest = std::mem::take(&mut self.buf);

        if self.mode == Mode::Lines {
            // Trailing segment without a final newline
            records.extend(LogRecord::from_payload(None, &rest));
            return records;
        }

        if rest.len() >= HEADER_LEN && header_plausible(&rest) {
            let stream = StreamKind::from_tag(rest[0]);
            records.extend(LogRecord::from_payload(stream, &rest[HEADER_LEN..]));
        } else {
            records.extend(LogRecord::from_payload(None, &rest));
        }
        records
    }

    /// Drain every complete frame from the front of the buffer.
    fn drain_frames(&mut self) -> Vec<LogRecord> {
        let mut records = Vec::new();
        let mut cursor = 0;

        while self.buf.len() - cursor >= HEADER_LEN {
            let header = &self.buf[cursor..cursor + HEADER_LEN];
            let len = u32::from_be_bytes([header[4], header[5], header[6], header[7]]) as usize;
            let frame_end = match (cursor + HEADER_LEN).checked_add(len) {
                Some(end) if end <= self.buf.len() => end,
                // Payload not fully buffered (or the length field is
                // garbage large): insufficient data, wait for more
                _ => break,
            };
            let stream = StreamKind::from_tag(header[0]);
            let payload = &self.buf[cursor + HEADER_LEN..frame_end];
            records.extend(LogRecord::from_payload(stream, payload));
            cursor = frame_end;
        }

        self.buf.drain(..cursor);
        records
    }

    /// Drain every complete newline-terminated segment from the buffer.
    fn drain_lines(&mut self) -> Vec<LogRecord> {
        let mut records = Vec::new();
        let Some(last_newline) = self.buf.iter().rposition(|&b| b == b'\n') else {
            return records;
        };
        let complete: Vec<u8> = self.buf.drain(..=last_newline).collect();
        for segment in complete.split(|&b| b == b'\n') {
            records.extend(LogRecord::from_payload(None, segment));
        }
        records
    }
}

/// Whether the buffered bytes could still be the prefix of a frame.
///
/// A frame starts [tag, 0, 0, 0, len; 4] with tag 0..=2; printable text
/// fails on the first byte, which is how TTY streams are recognized.
fn header_plausible(buf: &[u8]) -> bool {
    match buf.first() {
        None => true,
        Some(&tag) if StreamKind::from_tag(tag).is_none() => false,
        _ => buf.iter().take(4).skip(1).all(|&b| b == 0),
    }
}

/// Decode a complete, already-collected stream in one go.
///
/// Equivalent to feeding the whole byte sequence and flushing.
pub fn decode_all(data: &[u8]) -> Vec<LogRecord> {
    let mut decoder = FrameDecoder::new();
    let mut records = decoder.feed(data);
    records.extend(decoder.finish());
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build one wire frame: header + payload
    fn frame(tag: u8, payload: &[u8]) -> Vec<u8> {
        let mut out = vec![tag, 0, 0, 0];
        out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        out.extend_from_slice(payload);
        out
    }

    #[test]
    fn test_single_frame() {
        let mut decoder = FrameDecoder::new();
        let records = decoder.feed(&frame(1, b"hello\n"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "hello");
        assert_eq!(records[0].stream, Some(StreamKind::Stdout));
        assert_eq!(decoder.pending(), 0);
    }

    #[test]
    fn test_multiple_frames_in_one_chunk_preserve_order() {
        let mut data = frame(1, b"first\n");
        data.extend(frame(2, b"second\n"));
        data.extend(frame(1, b"third\n"));

        let mut decoder = FrameDecoder::new();
        let records = decoder.feed(&data);
        let texts: Vec<_> = records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
        assert_eq!(records[1].stream, Some(StreamKind::Stderr));
    }

    #[test]
    fn test_partial_payload_waits_for_more_input() {
        // 20-byte payload split 10 + 10: no record until the second chunk
        let full = frame(1, b"exactly-twenty-bytes");
        assert_eq!(full.len(), 28);

        let mut decoder = FrameDecoder::new();
        let first = decoder.feed(&full[..10]);
        assert!(first.is_empty());
        assert_eq!(decoder.pending(), 10);

        let second = decoder.feed(&full[10..]);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].text, "exactly-twenty-bytes");
    }

    #[test]
    fn test_partial_header_waits_for_more_input() {
        let full = frame(2, b"stderr line");
        let mut decoder = FrameDecoder::new();
        assert!(decoder.feed(&full[..5]).is_empty());
        let records = decoder.feed(&full[5..]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].stream, Some(StreamKind::Stderr));
    }

    #[test]
    fn test_frame_split_across_many_chunks() {
        let full = frame(1, b"spread out over several reads");
        let mut decoder = FrameDecoder::new();
        let mut records = Vec::new();
        for byte in &full {
            records.extend(decoder.feed(std::slice::from_ref(byte)));
        }
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "spread out over several reads");
    }

    #[test]
    fn test_blank_frames_are_dropped() {
        let mut data = frame(1, b"\n");
        data.extend(frame(1, b"kept\n"));
        data.extend(frame(1, b"   \n"));

        let records = decode_all(&data);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "kept");
    }

    #[test]
    fn test_unframed_stream_falls_back_to_line_splitting() {
        let mut decoder = FrameDecoder::new();
        let records = decoder.feed(b"INFO start\nERROR boom\n");
        let texts: Vec<_> = records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["INFO start", "ERROR boom"]);
        assert!(records.iter().all(|r| r.stream.is_none()));
    }

    #[test]
    fn test_garbage_with_embedded_newlines_never_errors() {
        let mut decoder = FrameDecoder::new();
        let records = decoder.feed(b"\x1b[31mred\x1b[0m\nplain\n\xff\xfe\n");
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].text, "plain");
    }

    #[test]
    fn test_line_mode_sticks_once_committed() {
        let mut decoder = FrameDecoder::new();
        decoder.feed(b"tty output\n");
        // Later bytes that happen to resemble a frame header stay line data
        let mut chunk = vec![1, 0, 0, 0, 0, 0, 0, 4];
        chunk.extend_from_slice(b"text\n");
        let records = decoder.feed(&chunk);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_line_mode_keeps_partial_line_buffered() {
        let mut decoder = FrameDecoder::new();
        let records = decoder.feed(b"first\nsecond part");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "first");

        let records = decoder.feed(b" continues\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "second part continues");
    }

    #[test]
    fn test_finish_emits_trailing_unterminated_line() {
        let mut decoder = FrameDecoder::new();
        decoder.feed(b"done\nno trailing newline");
        let records = decoder.finish();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "no trailing newline");
    }

    #[test]
    fn test_finish_strips_header_of_incomplete_final_frame() {
        // Header declares 100 bytes but the stream dies after 7
        let mut data = vec![1, 0, 0, 0, 0, 0, 0, 100];
        data.extend_from_slice(b"cut off");

        let mut decoder = FrameDecoder::new();
        assert!(decoder.feed(&data).is_empty());
        let records = decoder.finish();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "cut off");
        assert_eq!(records[0].stream, Some(StreamKind::Stdout));
    }

    #[test]
    fn test_finish_emits_short_remainder_verbatim() {
        let mut decoder = FrameDecoder::new();
        assert!(decoder.feed(&[1, 0, 0]).is_empty());
        let records = decoder.finish();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].raw, vec![1, 0, 0]);
    }

    #[test]
    fn test_finish_on_clean_stream_is_empty() {
        let mut decoder = FrameDecoder::new();
        decoder.feed(&frame(1, b"all consumed\n"));
        assert!(decoder.finish().is_empty());
    }

    #[test]
    fn test_determinism_across_chunk_boundaries() {
        let mut data = Vec::new();
        for i in 0..50 {
            let tag = if i % 3 == 0 { 2 } else { 1 };
            data.extend(frame(tag, format!("line number {i}\n").as_bytes()));
        }

        let whole = decode_all(&data);

        let mut decoder = FrameDecoder::new();
        let mut chunked = Vec::new();
        for chunk in data.chunks(7) {
            chunked.extend(decoder.feed(chunk));
        }
        chunked.extend(decoder.finish());

        assert_eq!(whole.len(), 50);
        assert_eq!(whole.len(), chunked.len());
        for (a, b) in whole.iter().zip(&chunked) {
            assert_eq!(a.text, b.text);
            assert_eq!(a.stream, b.stream);
        }
    }

    #[test]
    fn test_decode_all_empty_input() {
        assert!(decode_all(b"").is_empty());
    }
}
