//! Bytecode dispatch loop

use crate::bytecode::{Chunk, OpCode};
use crate::runtime::Value;
use hum_log::{trace, Logger};
use std::sync::Arc;

/// Terminal result of one interpretation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InterpretResult {
    /// Execution halted cleanly, via `Return` or by exhausting the chunk
    Ok,
    /// Execution halted on a fault; the message names what went wrong
    RuntimeError(String),
}

impl InterpretResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, InterpretResult::Ok)
    }
}

/// The virtual machine
///
/// A plain caller-owned value: create as many as you like, each run is
/// isolated. `interpret` borrows the chunk read-only, so one chunk can be
/// executed repeatedly or by several VMs.
pub struct Vm {
    /// Offset of the next instruction byte
    ip: usize,
    /// Values produced by executed instructions, in order
    emitted: Vec<Value>,
    logger: Arc<Logger>,
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}

impl Vm {
    pub fn new() -> Self {
        Self::with_logger(Logger::noop())
    }

    pub fn with_logger(logger: Arc<Logger>) -> Self {
        Self {
            ip: 0,
            emitted: Vec::new(),
            logger,
        }
    }

    /// Execute the chunk from offset 0 until a halt
    pub fn interpret(&mut self, chunk: &Chunk) -> InterpretResult {
        self.ip = 0;
        self.run(chunk)
    }

    /// Take the values emitted so far, leaving the VM empty
    pub fn take_emitted(&mut self) -> Vec<Value> {
        std::mem::take(&mut self.emitted)
    }

    fn run(&mut self, chunk: &Chunk) -> InterpretResult {
        loop {
            let offset = self.ip;
            let Some(&byte) = chunk.code().get(offset) else {
                // ran off the end without a Return: clean exhaustion
                trace!(self.logger, "chunk exhausted at offset {}", offset);
                return InterpretResult::Ok;
            };
            self.ip += 1;

            let Some(op) = OpCode::decode(byte) else {
                return InterpretResult::RuntimeError(format!(
                    "Unknown opcode 0x{byte:02x} at offset {offset}"
                ));
            };

            trace!(self.logger, "{:04} {}", offset, op.name());

            match op {
                OpCode::Constant => {
                    let Some(&idx) = chunk.code().get(self.ip) else {
                        return InterpretResult::RuntimeError(format!(
                            "Truncated {} at offset {offset}: missing operand",
                            op.name()
                        ));
                    };
                    self.ip += 1;

                    match chunk.constants().get(idx as usize) {
                        Some(value) => {
                            // a future operand stack replaces this push;
                            // fetch and decode stay as they are
                            self.emitted.push(*value);
                        }
                        None => {
                            return InterpretResult::RuntimeError(format!(
                                "Constant index {idx} out of range (pool has {} entries)",
                                chunk.constants().len()
                            ));
                        }
                    }
                }
                OpCode::Return => {
                    return InterpretResult::Ok;
                }
            }
        }
    }
}
