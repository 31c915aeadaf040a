//! # Spec-level Error Types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("Malformed binary: {len} bytes is not a whole number of 4-byte words")]
    MalformedBinaryLength { len: usize },
}

pub type Result<T> = std::result::Result<T, SpecError>;
