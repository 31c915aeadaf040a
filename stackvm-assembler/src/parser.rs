//! Assembly parser
//!
//! Turns one source line into at most one intermediate instruction record.

use stackvm_spec::encoding::OPERAND_BITS;
use stackvm_spec::{Instruction, Opcode};

use crate::error::{AssemblerError, Result};
use crate::lexer::Token;

/// Parse a single source line.
///
/// Returns `Ok(None)` for blank and comment-only lines. `line_no` is the
/// 1-based line number reported in errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Instruction>> {
    let mut tokens = tokenize(line, line_no)?.into_iter();

    let mnemonic = match tokens.next() {
        None => return Ok(None),
        Some(Token::Mnemonic(name)) => name,
        Some(Token::Number(token)) => {
            return Err(AssemblerError::TrailingToken { token, line: line_no })
        }
    };

    let opcode = Opcode::from_mnemonic(&mnemonic).ok_or(AssemblerError::UnknownInstruction {
        mnemonic,
        line: line_no,
    })?;

    let instruction = match opcode {
        Opcode::LoadConst => Instruction::LoadConst {
            value: expect_operand(&mut tokens, opcode, line_no)?,
        },
        Opcode::ReadMem => Instruction::ReadMem {
            addr: expect_operand(&mut tokens, opcode, line_no)?,
        },
        Opcode::WriteMem => Instruction::WriteMem,
        Opcode::BitReverse => Instruction::BitReverse,
    };

    if let Some(extra) = tokens.next() {
        let (Token::Mnemonic(token) | Token::Number(token)) = extra;
        return Err(AssemblerError::TrailingToken { token, line: line_no });
    }

    Ok(Some(instruction))
}

/// Lex a whole line up front so stray characters fail before any parsing
fn tokenize(line: &str, line_no: usize) -> Result<Vec<Token>> {
    use logos::Logos;

    let mut lex = Token::lexer(line);
    let mut tokens = Vec::new();
    while let Some(token) = lex.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(AssemblerError::TrailingToken {
                    token: lex.slice().to_string(),
                    line: line_no,
                })
            }
        }
    }
    Ok(tokens)
}

/// Consume the base-10 operand an opcode requires
fn expect_operand(
    tokens: &mut impl Iterator<Item = Token>,
    opcode: Opcode,
    line_no: usize,
) -> Result<u32> {
    let token = match tokens.next() {
        None => {
            return Err(AssemblerError::MissingOperand {
                mnemonic: opcode.mnemonic(),
                line: line_no,
            })
        }
        Some(Token::Number(token)) => token,
        Some(Token::Mnemonic(token)) => {
            return Err(AssemblerError::InvalidOperand { token, line: line_no })
        }
    };

    let value: u64 = token.parse().map_err(|_| AssemblerError::InvalidOperand {
        token: token.clone(),
        line: line_no,
    })?;

    if value >= 1 << OPERAND_BITS {
        return Err(AssemblerError::OperandOutOfRange {
            value,
            line: line_no,
        });
    }

    Ok(value as u32)
}
