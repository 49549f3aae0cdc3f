use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// Prefix sign operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
}

impl UnaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(UnaryOperator::Plus),
            TokenKind::Minus => Some(UnaryOperator::Minus),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Infix arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Subtract),
            TokenKind::Multiply => Some(BinaryOperator::Multiply),
            TokenKind::Divide => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
}

/// Unary Expression
/// A sign applied to exactly one operand, e.g. `-5`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOperator,
    pub operand: Box<Expr>,
}

/// Binary Expression
/// An arithmetic operation between two operands, e.g. `2 * 3`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
}

/// An expression tree node.
///
/// Children are owned by exactly one parent and are always built before the
/// node holding them. Parentheses leave no node behind.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Expr::Number(NumberExpr { value })
    }

    pub fn unary(operator: UnaryOperator, operand: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn binary(left: Expr, operator: BinaryOperator, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Dispatches to the visitor method matching this node's variant.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Number(expr) => visitor.visit_number(expr),
            Expr::Unary(expr) => visitor.visit_unary(expr),
            Expr::Binary(expr) => visitor.visit_binary(expr),
        }
    }

    /// Direct children in display order: left then right, or the single operand.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Number(_) => vec![],
            Expr::Unary(expr) => vec![&*expr.operand],
            Expr::Binary(expr) => vec![&*expr.left, &*expr.right],
        }
    }
}

/// Per-variant behaviour over an expression tree.
pub trait Visitor {
    type Output;

    fn visit_number(&mut self, expr: &NumberExpr) -> Self::Output;
    fn visit_unary(&mut self, expr: &UnaryExpr) -> Self::Output;
    fn visit_binary(&mut self, expr: &BinaryExpr) -> Self::Output;
}
