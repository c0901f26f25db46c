//! API error types

use thiserror::Error;

/// Process exit code for success
pub const EXIT_OK: i32 = 0;
/// Process exit code for compile errors (sysexits EX_DATAERR)
pub const EXIT_COMPILE_ERROR: i32 = 65;
/// Process exit code for runtime errors (sysexits EX_SOFTWARE)
pub const EXIT_RUNTIME_ERROR: i32 = 70;

/// Unified Hum error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HumError {
    /// Lexical or compile-time error at a known source line
    #[error("[line {line}] Error: {message}")]
    Compile { line: usize, message: String },

    /// Execution fault
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl HumError {
    /// Name of the phase the error came from
    pub fn phase(&self) -> &'static str {
        match self {
            HumError::Compile { .. } => "compile",
            HumError::Runtime(_) => "runtime",
        }
    }

    /// Source line the error points at, if known
    pub fn line(&self) -> Option<usize> {
        match self {
            HumError::Compile { line, .. } => Some(*line),
            HumError::Runtime(_) => None,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HumError::Compile { .. } => EXIT_COMPILE_ERROR,
            HumError::Runtime(_) => EXIT_RUNTIME_ERROR,
        }
    }
}
