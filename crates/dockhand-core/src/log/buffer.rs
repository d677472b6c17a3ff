//! Bounded log line storage

use std::collections::VecDeque;

use super::record::LogRecord;

/// Default number of retained lines per log session
pub const DEFAULT_LOG_CAPACITY: usize = 500;

/// Append-only, capacity-capped sequence of decoded log lines.
///
/// Insertion order is arrival order. Appending beyond capacity evicts from
/// the front, one deque pop per evicted line, so the buffer never holds
/// more than `capacity` records.
#[derive(Debug)]
pub struct LogBuffer {
    records: VecDeque<LogRecord>,
    capacity: usize,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// A zero capacity would make every append a no-op; clamp to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append one record, evicting from the front when over capacity.
    ///
    /// Returns how many records were evicted so callers can shift any
    /// indices they hold into the buffer.
    pub fn append(&mut self, record: LogRecord) -> usize {
        self.records.push_back(record);
        let mut evicted = 0;
        while self.records.len() > self.capacity {
            self.records.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Append a batch, returning the total evicted count.
    pub fn extend(&mut self, records: impl IntoIterator<Item = LogRecord>) -> usize {
        records.into_iter().map(|r| self.append(r)).sum()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&LogRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogRecord> {
        self.records.iter()
    }
}
