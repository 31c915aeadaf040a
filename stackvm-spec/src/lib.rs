//! # stackvm Specification
//!
//! Shared contract between the assembler and the runtime: the opcode table,
//! the 32-bit instruction word codec, and the flat binary program format.
//!
//! The two pipelines never talk to each other directly; a program file is a
//! headerless sequence of 4-byte little-endian words, and this crate is the
//! single definition of what those words mean.
//!
//! ## Instruction Format (32-bit)
//!
//! ```text
//! [operand:26][opcode:6]
//! ```
//!
//! The opcode occupies the low 6 bits; the operand field fills the remaining
//! 26 bits and is zero for opcodes that take their inputs from the stack.

pub mod encoding;
pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

pub use error::{Result, SpecError};
pub use instruction::{Instruction, InstructionWord};
pub use opcode::Opcode;
pub use program::Program;

/// Number of memory cells in a VM instance
pub const MEM_SIZE: usize = 1024;

/// Stack and memory cell type (fixed 32-bit unsigned)
pub type Word = u32;

/// Memory address type (valid range 0..MEM_SIZE)
pub type Address = u32;
