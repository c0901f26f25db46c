//! Hum Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Hum crates.

use serde::{Deserialize, Serialize};

/// Configuration for compiler behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Whether to trace tokens as they are scanned
    pub trace_tokens: bool,
}

/// Configuration for execution limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    /// Maximum length of one REPL input line in bytes
    pub max_repl_line: usize,
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Lexer,
    Vm,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Vm => "vm",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("hum::{}", self.as_str())
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            trace_tokens: false,
        }
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_repl_line: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_compiler_config() {
        let cfg = CompilerConfig::default();
        assert!(!cfg.trace_tokens);
    }

    #[test]
    fn test_default_limit_config() {
        let cfg = LimitConfig::default();
        assert_eq!(cfg.max_repl_line, 1024);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Lexer.as_str(), "lexer");
        assert_eq!(Phase::Vm.target(), "hum::vm");
    }

    #[test]
    fn test_compiler_config_roundtrip() {
        let cfg = CompilerConfig { trace_tokens: true };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: CompilerConfig = serde_json::from_str(&json).unwrap();
        assert!(back.trace_tokens);
    }
}
