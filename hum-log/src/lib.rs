//! Hum Log - structured logging for the Hum toolchain
//!
//! There is no global logger. Every component that logs holds an explicit
//! `Arc<Logger>` handle, so libraries stay silent unless the caller wires a
//! sink in. Tests capture output through [`LogRingBuffer`].

mod config;
mod logger;
mod record;
mod ring_buffer;

#[macro_use]
mod macros;

pub use config::{LogConfig, OutputConfig};
pub use logger::{LogSink, Logger, StderrSink, StdoutSink};
pub use record::{Level, Record};
pub use ring_buffer::{LogRingBuffer, RingBufferStats};
