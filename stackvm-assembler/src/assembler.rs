//! Main assembler logic

use stackvm_spec::{Instruction, Program};

use crate::error::Result;
use crate::parser::parse_line;

/// Parse source text into the intermediate instruction sequence.
///
/// Source order is preserved exactly; it becomes execution order.
pub fn parse_source(source: &str) -> Result<Vec<Instruction>> {
    let mut instructions = Vec::new();

    for (index, line) in source.lines().enumerate() {
        if let Some(instruction) = parse_line(line, index + 1)? {
            instructions.push(instruction);
        }
    }

    Ok(instructions)
}

/// Assemble source text into a binary program
pub fn assemble(source: &str) -> Result<Program> {
    let instructions = parse_source(source)?;
    Ok(Program::from_instructions(&instructions))
}
