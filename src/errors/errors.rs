use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A syntax error raised while turning source text into a tree.
///
/// Parsing is fail-fast: the first error aborts the whole call and no
/// partial tree is returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ConsecutiveSigns { .. } => "ConsecutiveSigns",
            ErrorImpl::InvalidFactor { .. } => "InvalidFactor",
            ErrorImpl::MissingClosingParen { .. } => "MissingClosingParen",
            ErrorImpl::TrailingTokens { .. } => "TrailingTokens",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected {} but got {}", expected, found))
            }
            ErrorImpl::ConsecutiveSigns { sign } => ErrorTip::Suggestion(format!(
                "Consecutive `{}` operators, separate them with parentheses",
                sign
            )),
            ErrorImpl::InvalidFactor { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected a number, a sign or `(`",
                token
            )),
            ErrorImpl::MissingClosingParen { found } => ErrorTip::Suggestion(format!(
                "Expected closing parenthesis, found `{}`",
                found
            )),
            ErrorImpl::TrailingTokens { token } => ErrorTip::Suggestion(format!(
                "Unexpected token after expression: `{}`, did you miss an operator?",
                token
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "More than {} nested groups or signs, simplify the expression",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SyntaxError: {}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("expected {expected} but got {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("unexpected token: consecutive {sign} operators")]
    ConsecutiveSigns { sign: String },
    #[error("unexpected token: {token}")]
    InvalidFactor { token: String },
    #[error("expected closing parenthesis, found {found}")]
    MissingClosingParen { found: TokenKind },
    #[error("unexpected tokens after expression: {token}")]
    TrailingTokens { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
