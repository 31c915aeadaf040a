//! # stackvm Runtime
//!
//! Execute binary stackvm programs against a value stack and a flat,
//! zero-initialized memory of [`MEM_SIZE`](stackvm_spec::MEM_SIZE) cells,
//! then dump any address range as a structured record list.
//!
//! Execution is single-threaded and runs to completion in one pass; each
//! [`Vm`] owns its stack, memory, and instruction pointer outright, so
//! independent instances never share state.
//!
//! ## Example
//!
//! ```rust
//! use stackvm_runtime::Vm;
//! use stackvm_spec::{Instruction, Program};
//!
//! let program = Program::from_instructions(&[
//!     Instruction::LoadConst { value: 7 },
//!     Instruction::LoadConst { value: 3 },
//!     Instruction::WriteMem,
//! ]);
//!
//! let mut vm = Vm::new(program);
//! vm.run().unwrap();
//! assert_eq!(vm.memory().read(3).unwrap(), 7);
//! ```

pub mod dump;
pub mod error;
pub mod execute;
pub mod memory;
pub mod state;
pub mod vm;

pub use dump::MemoryCell;
pub use error::{Result, RuntimeError};
pub use memory::Memory;
pub use state::VmState;
pub use vm::{ExecutionSummary, Vm};

/// Run a program to completion and return the finished VM
///
/// Convenience wrapper for the common load-run-dump sequence; the returned
/// VM exposes the final memory and stack.
pub fn run(program: stackvm_spec::Program) -> Result<Vm> {
    let mut vm = Vm::new(program);
    vm.run()?;
    Ok(vm)
}
