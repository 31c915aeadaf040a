//! Instruction execution
//!
//! One decoded record in, one state transition out. Opcode validity is
//! judged here, not at load time, so a bad word only fails if it is reached.

use stackvm_spec::{InstructionWord, Opcode};

use crate::error::{Result, RuntimeError};
use crate::memory::Memory;
use crate::state::VmState;

/// Execute a single instruction record against the VM state
pub fn execute(record: InstructionWord, state: &mut VmState, memory: &mut Memory) -> Result<()> {
    let opcode = Opcode::from_u8(record.opcode).ok_or(RuntimeError::UnknownOpcode {
        opcode: record.opcode,
        ip: state.ip,
    })?;

    match opcode {
        Opcode::LoadConst => {
            state.push(record.operand);
        }

        Opcode::ReadMem => {
            let value = memory.read(record.operand)?;
            state.push(value);
        }

        Opcode::WriteMem => {
            let found = state.depth();
            // Address is popped first (topmost), then the value
            match (state.pop(), state.pop()) {
                (Some(address), Some(value)) => memory.write(address, value)?,
                _ => {
                    return Err(RuntimeError::StackUnderflow {
                        mnemonic: opcode.mnemonic(),
                        needed: 2,
                        found,
                    })
                }
            }
        }

        Opcode::BitReverse => {
            let found = state.depth();
            match state.pop() {
                Some(value) => state.push(value.reverse_bits()),
                None => {
                    return Err(RuntimeError::StackUnderflow {
                        mnemonic: opcode.mnemonic(),
                        needed: 1,
                        found,
                    })
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackvm_spec::Instruction;

    fn record(instruction: Instruction) -> InstructionWord {
        InstructionWord::decode(instruction.encode())
    }

    #[test]
    fn test_load_const_pushes_operand() {
        let mut state = VmState::new();
        let mut memory = Memory::new();

        execute(record(Instruction::LoadConst { value: 7 }), &mut state, &mut memory).unwrap();
        assert_eq!(state.stack, vec![7]);
    }

    #[test]
    fn test_read_mem_pushes_cell() {
        let mut state = VmState::new();
        let mut memory = Memory::new();
        memory.write(5, 123).unwrap();

        execute(record(Instruction::ReadMem { addr: 5 }), &mut state, &mut memory).unwrap();
        assert_eq!(state.stack, vec![123]);
    }

    #[test]
    fn test_read_mem_bounds() {
        let mut state = VmState::new();
        let mut memory = Memory::new();

        // Last valid address reads the zero-initialized cell
        execute(record(Instruction::ReadMem { addr: 1023 }), &mut state, &mut memory).unwrap();
        assert_eq!(state.stack, vec![0]);

        // One past the end fails
        let err = execute(record(Instruction::ReadMem { addr: 1024 }), &mut state, &mut memory)
            .unwrap_err();
        assert!(matches!(err, RuntimeError::AddressOutOfRange { address: 1024 }));
    }

    #[test]
    fn test_write_mem_pops_address_then_value() {
        let mut state = VmState::new();
        let mut memory = Memory::new();
        state.push(7); // value
        state.push(3); // address, pushed last so popped first

        execute(record(Instruction::WriteMem), &mut state, &mut memory).unwrap();
        assert_eq!(state.depth(), 0);
        assert_eq!(memory.read(3).unwrap(), 7);
    }

    #[test]
    fn test_write_mem_underflow() {
        let mut state = VmState::new();
        let mut memory = Memory::new();
        state.push(1);

        let err = execute(record(Instruction::WriteMem), &mut state, &mut memory).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::StackUnderflow { mnemonic: "WRITE_MEM", needed: 2, found: 1 }
        ));
    }

    #[test]
    fn test_write_mem_address_out_of_range() {
        let mut state = VmState::new();
        let mut memory = Memory::new();
        state.push(7); // value
        state.push(1024); // address past the end

        let err = execute(record(Instruction::WriteMem), &mut state, &mut memory).unwrap_err();
        assert!(matches!(err, RuntimeError::AddressOutOfRange { address: 1024 }));
    }

    #[test]
    fn test_bitreverse() {
        let mut state = VmState::new();
        let mut memory = Memory::new();
        state.push(1);

        execute(record(Instruction::BitReverse), &mut state, &mut memory).unwrap();
        assert_eq!(state.stack, vec![0x8000_0000]);
    }

    #[test]
    fn test_bitreverse_underflow() {
        let mut state = VmState::new();
        let mut memory = Memory::new();

        let err = execute(record(Instruction::BitReverse), &mut state, &mut memory).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::StackUnderflow { mnemonic: "BITREVERSE", needed: 1, found: 0 }
        ));
    }

    #[test]
    fn test_unknown_opcode() {
        let mut state = VmState::new();
        let mut memory = Memory::new();
        state.ip = 9;

        let err = execute(
            InstructionWord { opcode: 63, operand: 0 },
            &mut state,
            &mut memory,
        )
        .unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownOpcode { opcode: 63, ip: 9 }));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_bitreverse_is_involutive(value: u32) {
                let mut state = VmState::new();
                let mut memory = Memory::new();
                state.push(value);

                execute(record(Instruction::BitReverse), &mut state, &mut memory).unwrap();
                execute(record(Instruction::BitReverse), &mut state, &mut memory).unwrap();
                prop_assert_eq!(state.stack, vec![value]);
            }
        }
    }
}
