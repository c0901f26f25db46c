//! Logger implementation

use crate::record::{Level, Record};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

/// Log output target trait
pub trait LogSink: Send + Sync {
    /// Write one log record
    fn write(&self, record: &Record);
}

/// Logger configuration and state
pub struct Logger {
    /// Current log level, stored atomically
    level: AtomicU8,
    /// Output targets
    sinks: Mutex<Vec<Box<dyn LogSink>>>,
}

impl Logger {
    /// Create a new logger with no sinks
    pub fn new(level: Level) -> Arc<Self> {
        Arc::new(Logger {
            level: AtomicU8::new(level as u8),
            sinks: Mutex::new(Vec::new()),
        })
    }

    /// Attach an output target, builder style
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    /// Attach an output target
    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        if let Ok(mut sinks) = self.sinks.lock() {
            sinks.push(Box::new(sink));
        }
    }

    /// Change the log level at runtime
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Current log level
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    /// Check whether the given level would be recorded
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Record a log message; prefer the `trace!`..`error!` macros,
    /// which skip formatting when the level is disabled
    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let record = Record::new(level, target, message);
        if let Ok(sinks) = self.sinks.lock() {
            for sink in sinks.iter() {
                sink.write(&record);
            }
        }
    }

    /// Logger that records nothing: Error level, no sinks
    pub fn noop() -> Arc<Self> {
        Self::new(Level::Error)
    }
}

// Arc<Logger> is itself a sink, allowing chained loggers
impl LogSink for Arc<Logger> {
    fn write(&self, record: &Record) {
        self.log(record.level, record.target, record.message.clone());
    }
}

/// Standard output sink
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write(&self, record: &Record) {
        println!("{}", record.format());
    }
}

/// Standard error sink
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, record: &Record) {
        eprintln!("{}", record.format());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogRingBuffer;

    #[test]
    fn test_logger_creation() {
        let logger = Logger::new(Level::Debug);
        assert_eq!(logger.level(), Level::Debug);
        assert!(logger.is_enabled(Level::Debug));
        assert!(!logger.is_enabled(Level::Trace));
    }

    #[test]
    fn test_level_change() {
        let logger = Logger::new(Level::Info);
        assert!(!logger.is_enabled(Level::Debug));

        logger.set_level(Level::Debug);
        assert!(logger.is_enabled(Level::Debug));
    }

    #[test]
    fn test_log_with_ring_buffer() {
        let ring = LogRingBuffer::new(100);
        let logger = Logger::new(Level::Debug).with_sink(ring.clone());

        logger.log(Level::Info, "test", "hello world");

        let records = ring.dump_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "hello world");
    }

    #[test]
    fn test_log_disabled_level() {
        let ring = LogRingBuffer::new(100);
        let logger = Logger::new(Level::Warn).with_sink(ring.clone());

        logger.log(Level::Debug, "test", "should not appear");
        assert_eq!(ring.len(), 0);

        logger.log(Level::Warn, "test", "should appear");
        assert_eq!(ring.len(), 1);
    }

    #[test]
    fn test_log_sink_for_arc_logger() {
        let ring = LogRingBuffer::new(100);
        let inner = Logger::new(Level::Debug).with_sink(ring.clone());

        let outer = Logger::new(Level::Debug);
        outer.add_sink(inner.clone());

        outer.log(Level::Info, "chain", "chained log");

        let records = ring.dump_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "chained log");
    }

    #[test]
    fn test_stdout_sink() {
        let sink = StdoutSink;
        let record = Record::new(Level::Info, "test", "stdout test");
        // only checks that it does not panic
        sink.write(&record);
    }

    #[test]
    fn test_stderr_sink() {
        let sink = StderrSink;
        let record = Record::new(Level::Warn, "test", "stderr test");
        // only checks that it does not panic
        sink.write(&record);
    }

    #[test]
    fn test_noop_logger() {
        let ring = LogRingBuffer::new(10);
        let logger = Logger::noop().with_sink(ring.clone());
        logger.log(Level::Info, "test", "should not appear");
        assert!(ring.is_empty());
    }
}
