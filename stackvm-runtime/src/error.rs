//! Runtime error types

use stackvm_spec::SpecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    Spec(#[from] SpecError),

    #[error("Unknown opcode {opcode} at instruction {ip}")]
    UnknownOpcode { opcode: u8, ip: usize },

    #[error("Stack underflow: {mnemonic} needs {needed} value(s), stack holds {found}")]
    StackUnderflow {
        mnemonic: &'static str,
        needed: usize,
        found: usize,
    },

    #[error("Address {address} out of range (memory holds {} cells)", stackvm_spec::MEM_SIZE)]
    AddressOutOfRange { address: u32 },

    #[error("Dump range [{start}, {end}] out of bounds")]
    RangeOutOfBounds { start: u32, end: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
