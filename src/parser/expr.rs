use crate::{
    ast::ast::{BinaryOperator, Expr, UnaryOperator},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// expression ::= term ((PLUS | MINUS) term)*
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_term(parser)?;

    loop {
        let kind = parser.current_token_kind();
        let (Some(operator @ (BinaryOperator::Add | BinaryOperator::Subtract)), Some(sign)) = (
            BinaryOperator::from_token_kind(kind),
            UnaryOperator::from_token_kind(kind),
        ) else {
            break;
        };
        parser.advance();

        // A prefix sign right after this operator must differ from it.
        parser.set_last_sign(Some(sign));
        let right = parse_term(parser)?;
        parser.set_last_sign(None);

        left = Expr::binary(left, operator, right);
    }

    Ok(left)
}

/// term ::= factor ((MULTIPLY | DIVIDE) factor)*
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_factor(parser)?;

    loop {
        let operator = match BinaryOperator::from_token_kind(parser.current_token_kind()) {
            Some(operator @ (BinaryOperator::Multiply | BinaryOperator::Divide)) => operator,
            _ => break,
        };
        parser.advance();

        let right = parse_factor(parser)?;
        left = Expr::binary(left, operator, right);
    }

    Ok(left)
}

/// factor ::= (PLUS | MINUS) factor | NUMBER | LPAREN expression RPAREN
pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    let kind = parser.current_token_kind();

    if let Some(sign) = UnaryOperator::from_token_kind(kind) {
        return parse_prefix_expr(parser, sign);
    }

    match kind {
        TokenKind::Number => parse_number_expr(parser),
        TokenKind::LParen => parse_grouping_expr(parser),
        _ => Err(Error::new(
            ErrorImpl::InvalidFactor {
                token: parser.current_token().to_string(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser, sign: UnaryOperator) -> Result<Expr, Error> {
    if parser.last_sign() == Some(sign) {
        return Err(Error::new(
            ErrorImpl::ConsecutiveSigns {
                sign: sign.symbol().to_string(),
            },
            parser.get_position(),
        ));
    }
    parser.advance();

    let operand = parser.with_last_sign(Some(sign), parse_factor)?;

    Ok(Expr::unary(sign, operand))
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.get_position();
    parser.set_last_sign(None);
    let token = parser.advance();

    let value = token.value.as_deref().and_then(|text| text.parse::<f64>().ok());
    match value {
        Some(value) => Ok(Expr::number(value)),
        None => Err(Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.unwrap_or_default(),
            },
            position,
        )),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();

    // A group starts a fresh adjacency context.
    let expr = parser.with_last_sign(None, parse_expr)?;

    let missing_paren = Error::new(
        ErrorImpl::MissingClosingParen {
            found: parser.current_token_kind(),
        },
        parser.get_position(),
    );
    parser.expect_error(TokenKind::RParen, Some(missing_paren))?;

    Ok(expr)
}
