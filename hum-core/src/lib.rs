//! Hum Core - lexer, bytecode chunk, and dispatch loop
//!
//! Pure logic, no file IO or terminal output. Anything this crate reports
//! goes through an explicit `Arc<Logger>` handle; callers that want silence
//! pass `Logger::noop()`.

pub mod bytecode;
pub mod lexer;
pub mod runtime;

pub use bytecode::{Chunk, LineStart, OpCode};
pub use lexer::{Lexer, Token, TokenKind};
pub use runtime::{InterpretResult, Value, Vm};

// Re-export the shared configuration vocabulary
pub use hum_config::{CompilerConfig, LimitConfig, Phase};
