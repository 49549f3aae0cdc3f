//! Parser state and the token stream accessor.
//!
//! The parser borrows the caller's tokens, keeps a cursor into them and
//! synthesizes an `EOF` token once the cursor runs past the end, so the
//! token source does not need to supply one.

use crate::{
    ast::ast::{Expr, UnaryOperator},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::expr::parse_expr;

/// Deepest nesting of groups and prefix signs accepted before parsing fails.
pub const MAX_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// The tokens being parsed, owned by the caller
    tokens: &'a [Token],
    /// Current position in the token stream
    pos: usize,
    /// The token at `pos`, or the synthetic end-of-input token
    current: Token,
    /// The sign operator consumed most recently in the current adjacency context
    last_sign: Option<UnaryOperator>,
    /// Number of groups and prefix operands currently being parsed
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let mut parser = Parser {
            tokens,
            pos: 0,
            current: Token::eof(),
            last_sign: None,
            depth: 0,
        };
        parser.current = parser.token_at(0);
        parser
    }

    fn token_at(&self, pos: usize) -> Token {
        match self.tokens.get(pos) {
            Some(token) => token.clone(),
            None => {
                let end = self.tokens.last().map_or(Position::null(), |t| t.span.end);
                Token {
                    kind: TokenKind::EOF,
                    value: None,
                    span: Span { start: end, end },
                }
            }
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// Past the end of the stream the current token stays `EOF`.
    pub fn advance(&mut self) -> Token {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        let next = self.token_at(self.pos);
        std::mem::replace(&mut self.current, next)
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) with the consumed token if the current token matches,
    /// otherwise returns `error` or a default `UnexpectedToken` error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let kind = self.current_token_kind();
        if kind != expected_kind {
            Err(error.unwrap_or_else(|| {
                Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: expected_kind,
                        found: kind,
                    },
                    self.get_position(),
                )
            }))
        } else {
            Ok(self.advance())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Index of the current token in the stream.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start
    }

    pub fn last_sign(&self) -> Option<UnaryOperator> {
        self.last_sign
    }

    pub fn set_last_sign(&mut self, sign: Option<UnaryOperator>) {
        self.last_sign = sign;
    }

    /// Runs `parse_fn` one nesting level deeper with the last sign set to
    /// `sign`, then restores the previous value.
    ///
    /// Fails with `NestingTooDeep` once `MAX_DEPTH` levels are open.
    pub fn with_last_sign<T>(
        &mut self,
        sign: Option<UnaryOperator>,
        parse_fn: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_DEPTH },
                self.get_position(),
            ));
        }

        let saved = std::mem::replace(&mut self.last_sign, sign);
        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;
        self.last_sign = saved;
        result
    }

    /// Parses the whole stream as a single expression followed by `EOF`.
    pub fn parse(&mut self) -> Result<Expr, Error> {
        let tree = parse_expr(self)?;

        if self.current_token_kind() != TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::TrailingTokens {
                    token: self.current.to_string(),
                },
                self.get_position(),
            ));
        }

        Ok(tree)
    }
}

/// Parses a stream of tokens into an expression tree.
///
/// This is the main entry point for parsing. A trailing `EOF` token in
/// `tokens` is optional; anything else left over after a complete
/// expression is an error.
pub fn parse(tokens: &[Token]) -> Result<Expr, Error> {
    Parser::new(tokens).parse()
}
