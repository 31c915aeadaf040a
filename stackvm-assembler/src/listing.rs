//! Diagnostic listing
//!
//! Renders the intermediate sequence next to its encoded bytes. Purely
//! informational; the binary output is unaffected.

use stackvm_spec::Instruction;

/// Render an assembled sequence as human-readable diagnostic text
pub fn listing(instructions: &[Instruction]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "; {} instructions, {} bytes\n",
        instructions.len(),
        instructions.len() * 4
    ));

    for (index, instruction) in instructions.iter().enumerate() {
        let bytes = instruction.encode().to_le_bytes();
        output.push_str(&format!(
            "{:4}:  {:02X} {:02X} {:02X} {:02X}  {}\n",
            index, bytes[0], bytes[1], bytes[2], bytes[3], instruction
        ));
    }

    output
}
