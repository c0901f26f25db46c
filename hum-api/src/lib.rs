//! Hum API - Execution orchestration layer
//!
//! Provides the unified execution interface:
//! - Execution flow orchestration (`run`, `compile_with_config`)
//! - Configuration abstraction (`RunConfig`)
//! - Unified error handling (`HumError`) and process exit-code mapping
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `run(source, &config)` API.

use hum_log::{debug, info};

use hum_core::{InterpretResult, Lexer, OpCode};

pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

pub mod error;
pub mod types;
pub use error::{HumError, EXIT_COMPILE_ERROR, EXIT_OK, EXIT_RUNTIME_ERROR};
pub use types::{CompileOutput, ExecuteOutput};

// Re-export core and config types callers need
pub use hum_config::{CompilerConfig, LimitConfig, Phase};
pub use hum_core::{Chunk, Token, TokenKind, Value, Vm};

/// Execute with explicit configuration
///
/// This is the recommended API for library users.
pub fn run(source: &str, config: &RunConfig) -> Result<ExecuteOutput, HumError> {
    info!(config.logger, "Starting execution");

    let compiled = compile_with_config(source, config)?;

    if config.dump_bytecode {
        compiled.chunk.disassemble("main");
    }

    let result = execute_with_config(&compiled.chunk, config)?;

    info!(config.logger, "Execution completed");
    Ok(result)
}

/// Compile with explicit configuration
///
/// Tokenizes the whole source. The first error token aborts compilation,
/// so execution never starts on lexically broken input. With no parser in
/// place yet, the produced chunk holds a single `Return` at the source's
/// final line.
pub fn compile_with_config(source: &str, config: &RunConfig) -> Result<CompileOutput, HumError> {
    let mut lexer = Lexer::with_logger(source, config.logger.clone());

    let mut token_count = 0;
    let mut last_line = 0;
    let mut final_line = 1;

    loop {
        let token = lexer.next_token();
        token_count += 1;

        if config.compiler.trace_tokens {
            // token trace format is debug output, not a stable interface
            let marker = if token.line != last_line {
                format!("{:4} ", token.line)
            } else {
                "   | ".to_string()
            };
            debug!(
                config.logger,
                "{}{:<12} '{}'",
                marker,
                token.kind.name(),
                token.lexeme
            );
            last_line = token.line;
        }

        if token.is_error() {
            return Err(HumError::Compile {
                line: token.line,
                message: token.lexeme.to_string(),
            });
        }

        final_line = token.line;
        if token.is_eof() {
            break;
        }
    }

    let mut chunk = Chunk::with_logger(config.logger.clone());
    chunk.write_op(OpCode::Return, final_line);

    debug!(
        config.logger,
        "compilation completed: tokens={}, code_bytes={}",
        token_count,
        chunk.len()
    );

    Ok(CompileOutput { chunk, token_count })
}

/// Execute with explicit configuration
fn execute_with_config(chunk: &Chunk, config: &RunConfig) -> Result<ExecuteOutput, HumError> {
    let mut vm = Vm::with_logger(config.logger.clone());

    match vm.interpret(chunk) {
        InterpretResult::Ok => Ok(ExecuteOutput {
            emitted: vm.take_emitted(),
        }),
        InterpretResult::RuntimeError(msg) => Err(HumError::Runtime(msg)),
    }
}

// ==================== Legacy API (using global config) ====================

/// Compile source code (uses global config)
///
/// # Panics
/// If global config is not initialized
pub fn compile(source: &str) -> Result<CompileOutput, HumError> {
    compile_with_config(source, get_config())
}

/// Compile and run (uses global config)
///
/// # Panics
/// If global config is not initialized
pub fn compile_and_run(source: &str) -> Result<ExecuteOutput, HumError> {
    run(source, get_config())
}

/// Quick run with default config (auto-initializes if needed)
pub fn quick_run(source: &str) -> Result<ExecuteOutput, HumError> {
    run(source, config::init_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_with_explicit_config() {
        let config = RunConfig::default();
        let result = run("x := 1.5", &config);
        assert!(result.is_ok());
    }

    #[test]
    fn test_compile_counts_tokens() {
        let config = RunConfig::default();
        let output = compile_with_config("x := 1.5 # comment", &config).unwrap();
        // identifier, colon_equals, number, comment, eof
        assert_eq!(output.token_count, 5);
        assert_eq!(output.chunk.code(), &[OpCode::Return as u8]);
    }

    #[test]
    fn test_compile_error_short_circuits() {
        let config = RunConfig::default();
        let err = run("\"oops", &config).unwrap_err();
        assert_eq!(
            err,
            HumError::Compile {
                line: 1,
                message: "Unterminated string.".to_string(),
            }
        );
    }

    #[test]
    fn test_quick_run() {
        let result = quick_run("a => b");
        assert!(result.is_ok());
    }
}
