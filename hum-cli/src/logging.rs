//! CLI logger wiring

use hum_log::{Level, LogConfig, Logger};
use std::sync::Arc;

/// Parse a log level name from the command line
pub fn parse_log_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "silent" => Some(Level::Error), // silent = only errors
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

/// Build the CLI logger
///
/// Diagnostics go to stderr so program output on stdout stays clean.
/// Without a `--log-level` flag the logger is a noop.
pub fn build_logger(level: Option<Level>) -> Arc<Logger> {
    match level {
        Some(level) => {
            let (logger, _ring) = LogConfig::new(level).with_stderr().init();
            logger
        }
        None => Logger::noop(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Some(Level::Debug));
        assert_eq!(parse_log_level("TRACE"), Some(Level::Trace));
        assert_eq!(parse_log_level("silent"), Some(Level::Error));
        assert_eq!(parse_log_level("bogus"), None);
    }

    #[test]
    fn test_build_logger_default_is_quiet() {
        let logger = build_logger(None);
        assert!(!logger.is_enabled(Level::Warn));
    }

    #[test]
    fn test_build_logger_with_level() {
        let logger = build_logger(Some(Level::Debug));
        assert!(logger.is_enabled(Level::Debug));
        assert!(!logger.is_enabled(Level::Trace));
    }
}
