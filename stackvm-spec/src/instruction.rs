//! # Instruction Representations
//!
//! Two views of the same 32-bit word:
//!
//! - [`Instruction`] is the assembler-side record: one variant per opcode,
//!   with the operand given its meaning (a constant to push, an address to
//!   read). The parser produces these and the encoder packs them.
//! - [`InstructionWord`] is the runtime-side record: the raw (opcode,
//!   operand) pair unpacked from a word. Unpacking is total - the operand
//!   field is always extracted, and whether the opcode is valid or needs
//!   that operand is decided by the executor, not the decoder.

use std::fmt;

use crate::encoding;
use crate::opcode::Opcode;

/// A parsed instruction with its operand interpreted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Push a constant onto the stack
    LoadConst { value: u32 },
    /// Push the memory cell at a fixed address
    ReadMem { addr: u32 },
    /// Pop address, pop value, store value at address
    WriteMem,
    /// Pop a value, push its 32-bit bit reversal
    BitReverse,
}

impl Instruction {
    /// The opcode of this instruction
    pub const fn opcode(&self) -> Opcode {
        match self {
            Instruction::LoadConst { .. } => Opcode::LoadConst,
            Instruction::ReadMem { .. } => Opcode::ReadMem,
            Instruction::WriteMem => Opcode::WriteMem,
            Instruction::BitReverse => Opcode::BitReverse,
        }
    }

    /// The immediate operand, if this instruction carries one
    pub const fn operand(&self) -> Option<u32> {
        match self {
            Instruction::LoadConst { value } => Some(*value),
            Instruction::ReadMem { addr } => Some(*addr),
            Instruction::WriteMem | Instruction::BitReverse => None,
        }
    }

    /// Pack into a 32-bit instruction word (operand field zero when absent)
    pub fn encode(&self) -> u32 {
        encoding::encode_word(self.opcode().to_u8(), self.operand().unwrap_or(0))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand() {
            Some(operand) => write!(f, "{} {}", self.opcode(), operand),
            None => write!(f, "{}", self.opcode()),
        }
    }
}

/// One decoded instruction word: raw opcode bits plus the full operand field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionWord {
    /// Opcode field (bits 0-5); may name an opcode outside the table
    pub opcode: u8,
    /// Operand field (bits 6-31); zero or garbage for stack opcodes
    pub operand: u32,
}

impl InstructionWord {
    /// Unpack a 32-bit word. Never fails; unknown opcodes surface later,
    /// when the executor dispatches on them.
    #[inline]
    pub const fn decode(word: u32) -> Self {
        InstructionWord {
            opcode: encoding::opcode_of(word),
            operand: encoding::operand_of(word),
        }
    }

    /// Pack back into a 32-bit word
    #[inline]
    pub const fn encode(self) -> u32 {
        encoding::encode_word(self.opcode, self.operand)
    }
}
