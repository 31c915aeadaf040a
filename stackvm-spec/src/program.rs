//! # Binary Program Format
//!
//! A program file is a flat sequence of 4-byte little-endian instruction
//! words. There is no header, magic number, or length prefix; the only
//! well-formedness rule is that the file length is a multiple of 4.

use crate::encoding::WORD_BYTES;
use crate::error::{Result, SpecError};
use crate::instruction::{Instruction, InstructionWord};

/// An ordered sequence of decoded instruction records
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Decoded records, in execution order
    pub code: Vec<InstructionWord>,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self { code: Vec::new() }
    }

    /// Build a program from assembled instructions
    pub fn from_instructions(instructions: &[Instruction]) -> Self {
        Self {
            code: instructions
                .iter()
                .map(|instr| InstructionWord::decode(instr.encode()))
                .collect(),
        }
    }

    /// Decode a binary image
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % WORD_BYTES != 0 {
            return Err(SpecError::MalformedBinaryLength { len: bytes.len() });
        }

        let code = bytes
            .chunks_exact(WORD_BYTES)
            .map(|chunk| {
                let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                InstructionWord::decode(word)
            })
            .collect();

        Ok(Self { code })
    }

    /// Serialize to the wire format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.code.len() * WORD_BYTES);
        for record in &self.code {
            bytes.extend_from_slice(&record.encode().to_le_bytes());
        }
        bytes
    }

    /// Number of instructions
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// True when the program contains no instructions
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}
