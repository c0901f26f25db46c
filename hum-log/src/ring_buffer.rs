//! Capture ring buffer for log records

use crate::logger::LogSink;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Ring buffer statistics
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RingBufferStats {
    /// Number of records currently held
    pub record_count: usize,
    /// Records dropped because the buffer was full
    pub dropped_count: usize,
    /// Buffer capacity
    pub capacity: usize,
}

/// Bounded FIFO of log records
///
/// When the buffer is full, the oldest record is dropped to make room.
pub struct LogRingBuffer {
    inner: Mutex<VecDeque<Record>>,
    capacity: usize,
    dropped: AtomicUsize,
}

impl LogRingBuffer {
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(LogRingBuffer {
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            dropped: AtomicUsize::new(0),
        })
    }

    fn push(&self, record: Record) {
        if let Ok(mut inner) = self.inner.lock() {
            if inner.len() >= self.capacity {
                inner.pop_front();
                self.dropped.fetch_add(1, Ordering::Relaxed);
            }
            inner.push_back(record);
        }
    }

    /// All records currently held, oldest first
    pub fn dump_records(&self) -> Vec<Record> {
        match self.inner.lock() {
            Ok(inner) => inner.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Render all held records as one newline-joined string
    pub fn dump(&self) -> String {
        self.dump_records()
            .iter()
            .map(|r| r.format())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Drop all held records and reset the dropped counter
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.clear();
        }
        self.dropped.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> RingBufferStats {
        RingBufferStats {
            record_count: self.len(),
            dropped_count: self.dropped.load(Ordering::Relaxed),
            capacity: self.capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn dropped_count(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl LogSink for LogRingBuffer {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}

impl LogSink for Arc<LogRingBuffer> {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}
