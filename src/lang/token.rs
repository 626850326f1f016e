pub const NEWLINE: char = '\n';
pub const COMMA: char = ',';
pub const COMMENT: char = ';';

/// Everything that is not a delimiter counts as part of an identifier.
pub fn is_gasm_whitespace(c: char) -> bool {
    c != NEWLINE && c != COMMA && c.is_whitespace()
}

pub fn is_gasm_delimiter(c: char) -> bool {
    c == NEWLINE || c == COMMA || c == COMMENT || c.is_whitespace()
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Ident(String),
    Comma,
    Newline,
    Eof,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        *self == Token::Eof
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Ident(s) => write!(f, "{}", s),
            Comma => write!(f, "{}", COMMA),
            Newline => write!(f, "\\n"),
            Eof => write!(f, "EOF"),
        }
    }
}
