/*!
# Rust Language Module

This Rust module provides lexical analysis of the GASM language.

A GASM program is a sequence of lines. Each line holds one instruction:
an operation name followed by its parameters, separated by whitespace or
commas. Everything after a `;` is a comment.

*/

#[macro_use]
mod error;
mod instruction;
mod lex;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::Fault;
pub use instruction::Instruction;
pub use lex::Lexer;
pub use token::Token;
