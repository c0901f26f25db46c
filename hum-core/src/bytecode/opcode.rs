//! Instruction opcodes

/// One-byte instruction opcodes
///
/// Decoding is fallible on purpose: a byte that does not name an opcode is
/// a runtime fault, never silently skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    /// Load a constant from the pool; one u8 operand, the pool index
    Constant = 0,
    /// Halt execution
    Return = 1,
}

impl OpCode {
    /// Decode an instruction byte
    pub const fn decode(byte: u8) -> Option<OpCode> {
        match byte {
            0 => Some(OpCode::Constant),
            1 => Some(OpCode::Return),
            _ => None,
        }
    }

    /// Number of operand bytes following the opcode
    pub const fn operand_size(self) -> usize {
        match self {
            OpCode::Constant => 1,
            OpCode::Return => 0,
        }
    }

    /// Display name used by the disassembler
    pub const fn name(self) -> &'static str {
        match self {
            OpCode::Constant => "OP_CONSTANT",
            OpCode::Return => "OP_RETURN",
        }
    }
}
