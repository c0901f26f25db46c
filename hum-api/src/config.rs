//! API layer configuration
//!
//! Holds the execution configuration `RunConfig` and a global singleton
//! for CLI convenience.

use hum_config::{CompilerConfig, LimitConfig};
use hum_log::Logger;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Execution configuration
#[derive(Clone)]
pub struct RunConfig {
    /// Whether to dump bytecode after compilation
    pub dump_bytecode: bool,
    /// Compiler configuration
    pub compiler: CompilerConfig,
    /// Execution limits
    pub limits: LimitConfig,
    /// Logger
    pub logger: Arc<Logger>,
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("dump_bytecode", &self.dump_bytecode)
            .field("compiler", &self.compiler)
            .field("limits", &self.limits)
            .finish()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dump_bytecode: false,
            compiler: CompilerConfig::default(),
            limits: LimitConfig::default(),
            logger: Logger::noop(),
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

/// Get the global config, initializing it with defaults if nothing was set
pub fn init_default() -> &'static RunConfig {
    GLOBAL_CONFIG.get_or_init(RunConfig::default)
}
