//! Bytecode chunk

use super::OpCode;
use crate::runtime::Value;
use hum_log::{debug, Logger};
use std::sync::Arc;

const MIN_CAPACITY: usize = 8;

/// Doubling growth policy: 0 -> 8 -> 16 -> 32 -> ...
const fn grow_capacity(capacity: usize) -> usize {
    if capacity < MIN_CAPACITY {
        MIN_CAPACITY
    } else {
        capacity * 2
    }
}

/// One run of the line table: every instruction byte from `offset` up to
/// the next entry's offset was emitted from `line`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineStart {
    pub offset: usize,
    pub line: usize,
}

/// Dynamic bytecode buffer with a constant pool and a run-length encoded
/// line table
#[derive(Clone)]
pub struct Chunk {
    code: Vec<u8>,
    constants: Vec<Value>,
    lines: Vec<LineStart>,
    logger: Arc<Logger>,
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk")
            .field("code", &self.code)
            .field("constants", &self.constants)
            .field("lines", &self.lines)
            .finish()
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunk {
    pub fn new() -> Self {
        Self::with_logger(Logger::noop())
    }

    pub fn with_logger(logger: Arc<Logger>) -> Self {
        Self {
            code: Vec::new(),
            constants: Vec::new(),
            lines: Vec::new(),
            logger,
        }
    }

    /// Append one byte emitted from the given source line
    ///
    /// Existing bytes are never moved or discarded; capacity grows by
    /// doubling (8, 16, 32, ...) when the buffer is full.
    pub fn write(&mut self, byte: u8, line: usize) {
        if self.code.len() == self.code.capacity() {
            let wanted = grow_capacity(self.code.capacity());
            self.code.reserve_exact(wanted - self.code.len());
        }
        self.code.push(byte);

        // extend the current run when the line is unchanged
        match self.lines.last() {
            Some(last) if last.line == line => {}
            _ => self.lines.push(LineStart {
                offset: self.code.len() - 1,
                line,
            }),
        }
    }

    /// Write an operand-less instruction
    pub fn write_op(&mut self, op: OpCode, line: usize) {
        self.write(op as u8, line);
    }

    /// Write an instruction with one u8 operand
    pub fn write_op_u8(&mut self, op: OpCode, operand: u8, line: usize) {
        self.write(op as u8, line);
        self.write(operand, line);
    }

    /// Add a value to the constant pool and return its index
    ///
    /// Values are appended unconditionally; adding the same value twice
    /// yields two pool slots. Indices are stable for the life of the chunk.
    pub fn add_constant(&mut self, value: Value) -> usize {
        if self.constants.len() == self.constants.capacity() {
            let wanted = grow_capacity(self.constants.capacity());
            self.constants.reserve_exact(wanted - self.constants.len());
        }
        let idx = self.constants.len();
        self.constants.push(value);
        idx
    }

    /// Source line the byte at `offset` was emitted from
    ///
    /// `offset` must be within `code`; the first write always opens a run
    /// at offset 0, so every valid offset has an owning run.
    pub fn line_for(&self, offset: usize) -> usize {
        debug_assert!(offset < self.code.len());
        let idx = self.lines.partition_point(|run| run.offset <= offset);
        self.lines[idx - 1].line
    }

    pub fn code(&self) -> &[u8] {
        &self.code
    }

    pub fn constants(&self) -> &[Value] {
        &self.constants
    }

    /// Line table runs, for inspection
    pub fn lines(&self) -> &[LineStart] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Current capacity of the code buffer
    pub fn capacity(&self) -> usize {
        self.code.capacity()
    }

    /// Current capacity of the constant pool
    pub fn constants_capacity(&self) -> usize {
        self.constants.capacity()
    }

    /// Disassemble the whole chunk through the logger
    pub fn disassemble(&self, name: &str) {
        debug!(self.logger, "== {} ==", name);
        debug!(self.logger, "Constants:");
        for (i, constant) in self.constants.iter().enumerate() {
            debug!(self.logger, "  [{:3}] {}", i, constant);
        }
        debug!(self.logger, "Bytecode:");

        let mut offset = 0;
        while offset < self.code.len() {
            offset = self.disassemble_instruction(offset);
        }
    }

    /// Disassemble one instruction, returning the offset of the next
    pub fn disassemble_instruction(&self, offset: usize) -> usize {
        let line_info = if offset > 0 && self.line_for(offset) == self.line_for(offset - 1) {
            "   | ".to_string()
        } else {
            format!("{:4} ", self.line_for(offset))
        };

        let byte = self.code[offset];
        let Some(opcode) = OpCode::decode(byte) else {
            debug!(
                self.logger,
                "{:04} {}Unknown opcode 0x{:02x}", offset, line_info, byte
            );
            return offset + 1;
        };

        match opcode {
            OpCode::Constant => {
                let Some(&idx) = self.code.get(offset + 1) else {
                    debug!(
                        self.logger,
                        "{:04} {}{} <truncated>",
                        offset,
                        line_info,
                        opcode.name()
                    );
                    return offset + 2;
                };
                match self.constants.get(idx as usize) {
                    Some(value) => debug!(
                        self.logger,
                        "{:04} {}{} {:3} {}",
                        offset,
                        line_info,
                        opcode.name(),
                        idx,
                        value
                    ),
                    None => debug!(
                        self.logger,
                        "{:04} {}{} {:3} <out of range>",
                        offset,
                        line_info,
                        opcode.name(),
                        idx
                    ),
                }
                offset + 2
            }
            OpCode::Return => {
                debug!(self.logger, "{:04} {}{}", offset, line_info, opcode.name());
                offset + 1
            }
        }
    }
}
