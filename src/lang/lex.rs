use super::token::*;
use super::Instruction;
use std::iter::Peekable;

/// ## Instruction lexer
///
/// Owns the text it scans. The only way to restart is `reset`, which throws
/// away everything left of the previous source.

pub struct Lexer {
    chars: Peekable<std::vec::IntoIter<char>>,
}

impl Default for Lexer {
    fn default() -> Lexer {
        Lexer::new("")
    }
}

impl Lexer {
    pub fn new<S: AsRef<str>>(source: S) -> Lexer {
        Lexer {
            chars: source
                .as_ref()
                .chars()
                .collect::<Vec<char>>()
                .into_iter()
                .peekable(),
        }
    }

    pub fn reset<S: AsRef<str>>(&mut self, source: S) {
        *self = Lexer::new(source);
    }

    pub fn is_exhausted(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    /// Scans the next token. Whitespace and comments are never surfaced.
    pub fn token(&mut self) -> Token {
        loop {
            let pk = match self.chars.peek() {
                Some(ch) => *ch,
                None => return Token::Eof,
            };
            if is_gasm_whitespace(pk) {
                self.chars.next();
                continue;
            }
            if pk == COMMENT {
                self.comment();
                continue;
            }
            if pk == NEWLINE {
                self.chars.next();
                return Token::Newline;
            }
            if pk == COMMA {
                self.chars.next();
                return Token::Comma;
            }
            return self.identifier();
        }
    }

    /// Always returns an instruction; once the text runs out that is the
    /// EOF sentinel, as many times as asked.
    pub fn next_instruction(&mut self) -> Instruction {
        let mut identifiers: Vec<String> = vec![];
        loop {
            match self.token() {
                Token::Ident(s) => identifiers.push(s),
                Token::Comma => {}
                Token::Newline => {
                    if !identifiers.is_empty() {
                        break;
                    }
                }
                Token::Eof => {
                    if identifiers.is_empty() {
                        return Instruction::eof();
                    }
                    break;
                }
            }
        }
        let mut identifiers = identifiers.into_iter();
        match identifiers.next() {
            Some(operation) => Instruction::new(operation, identifiers.collect()),
            None => Instruction::eof(),
        }
    }

    fn comment(&mut self) {
        while let Some(pk) = self.chars.peek() {
            if *pk == NEWLINE {
                break;
            }
            self.chars.next();
        }
    }

    fn identifier(&mut self) -> Token {
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if is_gasm_delimiter(*pk) {
                break;
            }
            s.push(*pk);
            self.chars.next();
        }
        Token::Ident(s)
    }
}

impl Iterator for Lexer {
    type Item = Instruction;

    fn next(&mut self) -> Option<Self::Item> {
        let instruction = self.next_instruction();
        if instruction.is_eof() {
            None
        } else {
            Some(instruction)
        }
    }
}
