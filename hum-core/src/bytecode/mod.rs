//! Bytecode representation

mod chunk;
mod opcode;

pub use chunk::{Chunk, LineStart};
pub use opcode::OpCode;
