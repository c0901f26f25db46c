//! Logging presets
//!
//! One-call initialization of a logger plus its sinks.

use crate::{Level, LogRingBuffer, Logger, StderrSink, StdoutSink};
use std::sync::Arc;

/// One log output target
#[derive(Clone, Debug, PartialEq)]
pub enum OutputConfig {
    /// Write to standard output
    Stdout,
    /// Write to standard error
    Stderr,
    /// Capture into a ring buffer of the given capacity
    RingBuffer(usize),
}

/// Logging configuration
///
/// # Example
///
/// ```
/// use hum_log::{Level, LogConfig};
///
/// let config = LogConfig::new(Level::Debug).with_ring_buffer(10000);
/// let (logger, ring) = config.init();
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    /// Log level
    pub level: Level,
    /// Output targets
    pub outputs: Vec<OutputConfig>,
}

impl LogConfig {
    /// Configuration with the given level and no outputs
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
        }
    }

    /// Development preset: Debug level, stdout, 10000-record capture buffer
    pub fn dev() -> Self {
        LogConfig {
            level: Level::Debug,
            outputs: vec![OutputConfig::Stdout, OutputConfig::RingBuffer(10000)],
        }
    }

    /// Production preset: Warn level, stderr, 1000-record capture buffer
    pub fn production() -> Self {
        LogConfig {
            level: Level::Warn,
            outputs: vec![OutputConfig::Stderr, OutputConfig::RingBuffer(1000)],
        }
    }

    /// Silent preset for tests: Error level, no outputs
    pub fn test() -> Self {
        LogConfig {
            level: Level::Error,
            outputs: Vec::new(),
        }
    }

    /// Add a stdout output (at most one)
    pub fn with_stdout(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stdout) {
            self.outputs.push(OutputConfig::Stdout);
        }
        self
    }

    /// Add a stderr output (at most one)
    pub fn with_stderr(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stderr) {
            self.outputs.push(OutputConfig::Stderr);
        }
        self
    }

    /// Add a capture ring buffer output
    pub fn with_ring_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::RingBuffer(capacity));
        self
    }

    /// Build the logger and attach all configured sinks
    ///
    /// Returns the logger and, if a ring buffer was configured, a handle to it.
    pub fn init(self) -> (Arc<Logger>, Option<Arc<LogRingBuffer>>) {
        let logger = Logger::new(self.level);
        let mut ring_buffer: Option<Arc<LogRingBuffer>> = None;

        for output in self.outputs {
            match output {
                OutputConfig::Stdout => logger.add_sink(StdoutSink),
                OutputConfig::Stderr => logger.add_sink(StderrSink),
                OutputConfig::RingBuffer(capacity) => {
                    let ring = LogRingBuffer::new(capacity);
                    ring_buffer = Some(Arc::clone(&ring));
                    logger.add_sink(ring);
                }
            }
        }

        (logger, ring_buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = LogConfig::new(Level::Debug);
        assert_eq!(config.level, Level::Debug);
        assert!(config.outputs.is_empty());
    }

    #[test]
    fn test_config_dev() {
        let config = LogConfig::dev();
        assert_eq!(config.level, Level::Debug);
        assert!(config.outputs.contains(&OutputConfig::Stdout));
        assert!(config
            .outputs
            .iter()
            .any(|o| matches!(o, OutputConfig::RingBuffer(10000))));
    }

    #[test]
    fn test_config_production() {
        let config = LogConfig::production();
        assert_eq!(config.level, Level::Warn);
        assert!(config.outputs.contains(&OutputConfig::Stderr));
    }

    #[test]
    fn test_config_test() {
        let config = LogConfig::test();
        assert_eq!(config.level, Level::Error);
        assert!(config.outputs.is_empty());
    }

    #[test]
    fn test_config_init() {
        let config = LogConfig::new(Level::Debug).with_ring_buffer(100);

        let (logger, ring) = config.init();

        assert_eq!(logger.level(), Level::Debug);
        assert!(ring.is_some());

        crate::debug!(logger, "test message");
        let records = ring.unwrap().dump_records();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_config_init_no_ring() {
        let config = LogConfig::new(Level::Debug);
        let (logger, ring) = config.init();
        assert!(ring.is_none());
        crate::debug!(logger, "no sink");
    }

    #[test]
    fn test_stdout_dedup() {
        let config = LogConfig::new(Level::Info).with_stdout().with_stdout();
        let stdout_count = config
            .outputs
            .iter()
            .filter(|o| matches!(o, OutputConfig::Stdout))
            .count();
        assert_eq!(stdout_count, 1);
    }

    #[test]
    fn test_multiple_ring_buffers_allowed() {
        let config = LogConfig::new(Level::Debug)
            .with_ring_buffer(1000)
            .with_ring_buffer(2000);

        let ring_count = config
            .outputs
            .iter()
            .filter(|o| matches!(o, OutputConfig::RingBuffer(_)))
            .count();
        assert_eq!(ring_count, 2);
    }
}
