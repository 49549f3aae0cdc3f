use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Plus,
    Minus,
    Multiply,
    Divide,
    LParen,
    RParen,
    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::EOF => "EOF",
        };
        write!(f, "{}", name)
    }
}

/// A lexical token.
///
/// `value` holds the number text for `Number` and the printable symbol for
/// operator and parenthesis kinds. The synthetic end-of-input token has none.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
    pub span: Span,
}

impl Token {
    /// Builds a token with no source position, for hand-assembled streams.
    pub fn new(kind: TokenKind, value: Option<&str>) -> Self {
        Token {
            kind,
            value: value.map(String::from),
            span: Span::null(),
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::EOF, None)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "{}", self.kind),
        }
    }
}
