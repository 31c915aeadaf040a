//! # Lexer for stackvm Assembly
//!
//! The grammar is line-oriented, so the lexer is run on one line at a time
//! and never sees a newline.

use logos::Logos;

/// Tokens for stackvm assembly
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip whitespace
#[logos(skip r";[^\n]*")] // Skip comments
pub enum Token {
    /// Instruction mnemonic
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Mnemonic(String),

    /// Decimal integer literal, kept raw so the parser owns the diagnostics
    #[regex(r"-?[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
}
