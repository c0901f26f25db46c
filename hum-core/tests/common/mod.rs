//! Shared helpers for hum-core integration tests

use hum_core::{Chunk, Lexer, OpCode, TokenKind, Value};

/// Tokenize a whole source string into owned (kind, lexeme, line) tuples
pub fn lex(source: &str) -> Vec<(TokenKind, String, usize)> {
    let mut lexer = Lexer::new(source);
    lexer
        .tokens()
        .map(|t| (t.kind, t.lexeme.to_string(), t.line))
        .collect()
}

/// Chunk that loads each value in order and then returns
pub fn program(values: &[f64], line: usize) -> Chunk {
    let mut chunk = Chunk::new();
    for &v in values {
        let idx = chunk.add_constant(Value::Number(v));
        chunk.write_op_u8(OpCode::Constant, idx as u8, line);
    }
    chunk.write_op(OpCode::Return, line);
    chunk
}
