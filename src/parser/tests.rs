//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - The token stream accessor (advance, expect, synthetic EOF)
//! - Operator precedence, associativity and grouping
//! - The consecutive identical sign rule
//! - Error cases (trailing tokens, unbalanced parentheses, bad factors)

use super::parser::{parse, Parser, MAX_DEPTH};
use crate::{
    ast::ast::{BinaryOperator, Expr, UnaryOperator},
    errors::errors::{Error, ErrorImpl},
    interpreter::interpreter::evaluate,
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
};

fn parse_source(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source.to_string()).unwrap();
    parse(&tokens)
}

fn eval_source(source: &str) -> f64 {
    evaluate(&parse_source(source).unwrap())
}

fn error_name(source: &str) -> String {
    parse_source(source).unwrap_err().get_error_name().to_string()
}

#[test]
fn test_empty_stream_starts_at_eof() {
    let parser = Parser::new(&[]);

    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
    assert_eq!(parser.cursor(), 0);
}

#[test]
fn test_advance_is_idempotent_at_eof() {
    let tokens = vec![Token::new(TokenKind::Number, Some("1"))];
    let mut parser = Parser::new(&tokens);

    let previous = parser.advance();
    assert_eq!(previous.kind, TokenKind::Number);
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);

    parser.advance();
    parser.advance();
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
    assert_eq!(parser.cursor(), 1);
}

#[test]
fn test_expect() {
    let tokens = vec![
        Token::new(TokenKind::LParen, Some("(")),
        Token::new(TokenKind::RParen, Some(")")),
    ];
    let mut parser = Parser::new(&tokens);

    let consumed = parser.expect(TokenKind::LParen).unwrap();
    assert_eq!(consumed.kind, TokenKind::LParen);
    assert_eq!(parser.current_token_kind(), TokenKind::RParen);

    let error = parser.expect(TokenKind::Number).unwrap_err();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Number,
            found: TokenKind::RParen,
        }
    );
    // A failed expectation does not move the cursor.
    assert_eq!(parser.cursor(), 1);
}

#[test]
fn test_parse_without_explicit_eof() {
    let tokens = vec![
        Token::new(TokenKind::Number, Some("1")),
        Token::new(TokenKind::Plus, Some("+")),
        Token::new(TokenKind::Number, Some("2")),
    ];
    let mut parser = Parser::new(&tokens);
    let tree = parser.parse().unwrap();

    assert_eq!(
        tree,
        Expr::binary(Expr::number(1.0), BinaryOperator::Add, Expr::number(2.0))
    );
    assert_eq!(parser.cursor(), tokens.len());
}

#[test]
fn test_parse_consumes_every_token() {
    let tokens = tokenize("(1 + 2) * -3 / 4".to_string()).unwrap();
    let mut parser = Parser::new(&tokens);
    parser.parse().unwrap();

    // Stops on the lexer's own EOF token.
    assert_eq!(parser.cursor(), tokens.len() - 1);
}

#[test]
fn test_precedence() {
    let tree = parse_source("2+3*4").unwrap();

    assert_eq!(
        tree,
        Expr::binary(
            Expr::number(2.0),
            BinaryOperator::Add,
            Expr::binary(Expr::number(3.0), BinaryOperator::Multiply, Expr::number(4.0)),
        )
    );
    assert_eq!(evaluate(&tree), 14.0);
}

#[test]
fn test_left_associativity() {
    let tree = parse_source("8-3-2").unwrap();

    assert_eq!(
        tree,
        Expr::binary(
            Expr::binary(Expr::number(8.0), BinaryOperator::Subtract, Expr::number(3.0)),
            BinaryOperator::Subtract,
            Expr::number(2.0),
        )
    );
    assert_eq!(evaluate(&tree), 3.0);
    assert_eq!(eval_source("16/4/2"), 2.0);
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(eval_source("(2+3)*4"), 20.0);
    // Grouping leaves no node behind.
    assert_eq!(parse_source("((7))").unwrap(), Expr::number(7.0));
}

#[test]
fn test_unary_operators() {
    assert_eq!(
        parse_source("-5").unwrap(),
        Expr::unary(UnaryOperator::Minus, Expr::number(5.0))
    );
    assert_eq!(eval_source("+-3"), -3.0);
    assert_eq!(eval_source("-+-5"), 5.0);
    assert_eq!(eval_source("2*-3"), -6.0);
    assert_eq!(eval_source("-(-3)"), 3.0);
    assert_eq!(eval_source("(-1)-(-2)"), 1.0);
}

#[test]
fn test_consecutive_identical_signs_rejected() {
    for source in ["1++2", "1--2", "1 - -2", "++3", "--3", "---5", "1 + 2 - -3", "2 * - -3", "1 - -(2)"] {
        assert_eq!(error_name(source), "ConsecutiveSigns", "source: {}", source);
    }
}

#[test]
fn test_mixed_adjacent_signs_allowed() {
    assert_eq!(eval_source("1+-2"), -1.0);
    assert_eq!(eval_source("1-+2"), -1.0);
    assert_eq!(eval_source("2 - +-3"), 5.0);
    assert_eq!(eval_source("2 - 3 * -4"), 14.0);
    assert_eq!(eval_source("1 - (-2)"), 3.0);
}

#[test]
fn test_sign_state_restored_after_group_and_prefix_operand() {
    // The binary sign is back in force once the group or prefix operand ends.
    for source in ["1 - (2) * -3", "1 - +2 * -3", "1 + (2) * +3", "1 + -2 * +3", "-(1) - -2"] {
        assert_eq!(error_name(source), "ConsecutiveSigns", "source: {}", source);
    }

    // A plain number clears the state, so nothing is restored here.
    assert_eq!(eval_source("1 - 2 * -3"), 7.0);
    assert_eq!(eval_source("1 - (2) * +3"), -5.0);
    assert_eq!(eval_source("1 - +2 * +3"), -5.0);
}

#[test]
fn test_sign_state_cleared_after_right_operand() {
    assert_eq!(eval_source("1 - 2 + -3"), -4.0);
    assert_eq!(eval_source("1 - (2) + -3"), -4.0);
}

#[test]
fn test_consecutive_sign_error_details() {
    let error = parse_source("1--2").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::ConsecutiveSigns {
            sign: "-".to_string()
        }
    );
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_trailing_tokens_rejected() {
    assert_eq!(error_name("2+3 4"), "TrailingTokens");
    assert_eq!(error_name("2+3)"), "TrailingTokens");

    let error = parse_source("2+3 4").unwrap_err();
    assert_eq!(error.to_string(), "SyntaxError: unexpected tokens after expression: 4");
}

#[test]
fn test_missing_closing_paren() {
    let error = parse_source("(2+3").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::MissingClosingParen {
            found: TokenKind::EOF
        }
    );
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_invalid_factor() {
    assert_eq!(error_name(""), "InvalidFactor");
    assert_eq!(error_name("*3"), "InvalidFactor");
    assert_eq!(error_name("3+"), "InvalidFactor");
    assert_eq!(error_name("()"), "InvalidFactor");
}

#[test]
fn test_number_parse_error() {
    let missing = vec![Token::new(TokenKind::Number, None)];
    assert_eq!(parse(&missing).unwrap_err().get_error_name(), "NumberParseError");

    let malformed = vec![Token::new(TokenKind::Number, Some("1.2.3"))];
    assert_eq!(
        parse(&malformed).unwrap_err().get_impl(),
        &ErrorImpl::NumberParseError {
            token: "1.2.3".to_string()
        }
    );
}

fn nested_groups(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_nesting_within_limit() {
    assert_eq!(eval_source(&nested_groups(MAX_DEPTH)), 1.0);
    assert_eq!(eval_source(&format!("{}1", "-+".repeat(MAX_DEPTH / 2))), 1.0);
}

#[test]
fn test_nesting_too_deep() {
    let error = parse_source(&nested_groups(MAX_DEPTH + 1)).unwrap_err();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NestingTooDeep { limit: MAX_DEPTH }
    );
    // Points just inside the first group past the limit.
    assert_eq!(error.get_position().0, MAX_DEPTH as u32 + 1);

    let signs = format!("{}1", "-+".repeat(MAX_DEPTH));
    assert_eq!(parse_source(&signs).unwrap_err().get_error_name(), "NestingTooDeep");

    // Far past the limit still fails cleanly instead of exhausting the stack.
    assert_eq!(error_name(&nested_groups(100_000)), "NestingTooDeep");
}
