//! Virtual machine
//!
//! Owns the program and the whole execution state. Execution is strictly
//! linear: the instruction pointer starts at 0, advances by exactly one
//! after every instruction, and the run ends when it walks off the end of
//! the program. There is no halt opcode and no way to jump.

use stackvm_spec::{Program, Word};
use tracing::{debug, trace};

use crate::error::Result;
use crate::execute::execute;
use crate::memory::Memory;
use crate::state::VmState;

/// What a completed run looked like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Number of instructions executed
    pub executed: usize,

    /// Stack depth at the end of the run
    pub stack_depth: usize,
}

/// A single VM instance: one program, one stack, one memory
pub struct Vm {
    program: Program,
    state: VmState,
    memory: Memory,
}

impl Vm {
    /// Create a VM with zeroed memory and an empty stack
    pub fn new(program: Program) -> Self {
        Vm {
            program,
            state: VmState::new(),
            memory: Memory::new(),
        }
    }

    /// Run the program to completion.
    ///
    /// On error the run stops immediately; the state reachable through the
    /// accessors afterwards is not meaningful.
    pub fn run(&mut self) -> Result<ExecutionSummary> {
        debug!(instructions = self.program.len(), "starting execution");

        while self.state.ip < self.program.code.len() {
            let record = self.program.code[self.state.ip];
            trace!(
                ip = self.state.ip,
                opcode = record.opcode,
                operand = record.operand,
                depth = self.state.depth(),
                "step"
            );

            execute(record, &mut self.state, &mut self.memory)?;
            self.state.ip += 1;
        }

        let summary = ExecutionSummary {
            executed: self.state.ip,
            stack_depth: self.state.depth(),
        };
        debug!(
            executed = summary.executed,
            stack_depth = summary.stack_depth,
            "execution finished"
        );
        Ok(summary)
    }

    /// Final memory, for dumping and inspection
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Final stack contents, bottom first
    pub fn stack(&self) -> &[Word] {
        &self.state.stack
    }

    /// Execution state, for debugging
    pub fn state(&self) -> &VmState {
        &self.state
    }
}
