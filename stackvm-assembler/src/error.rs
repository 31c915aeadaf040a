//! Assembler errors
//!
//! Every variant carries the 1-based source line it was raised on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Line {line}: unknown instruction '{mnemonic}'")]
    UnknownInstruction { mnemonic: String, line: usize },

    #[error("Line {line}: {mnemonic} requires an operand")]
    MissingOperand { mnemonic: &'static str, line: usize },

    #[error("Line {line}: invalid operand '{token}'")]
    InvalidOperand { token: String, line: usize },

    #[error("Line {line}: operand {value} does not fit in 26 bits")]
    OperandOutOfRange { value: u64, line: usize },

    #[error("Line {line}: unexpected token '{token}'")]
    TrailingToken { token: String, line: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
