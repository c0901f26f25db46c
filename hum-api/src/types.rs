//! API input/output types

use hum_core::{Chunk, Value};

/// Compilation output
#[derive(Debug)]
pub struct CompileOutput {
    /// Compiled bytecode
    pub chunk: Chunk,
    /// Number of tokens scanned, including the final Eof
    pub token_count: usize,
}

/// Execution output
#[derive(Debug)]
pub struct ExecuteOutput {
    /// Values emitted during execution, in order
    pub emitted: Vec<Value>,
}
