use crate::ast::ast::{BinaryExpr, BinaryOperator, Expr, NumberExpr, UnaryExpr, UnaryOperator, Visitor};

/// Evaluates trees with IEEE-754 `f64` arithmetic.
///
/// Division by zero is not an error: it yields an infinity or NaN.
pub struct Interpreter;

impl Visitor for Interpreter {
    type Output = f64;

    fn visit_number(&mut self, expr: &NumberExpr) -> f64 {
        expr.value
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> f64 {
        let operand = expr.operand.accept(self);
        match expr.operator {
            UnaryOperator::Plus => operand,
            UnaryOperator::Minus => -operand,
        }
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> f64 {
        let left = expr.left.accept(self);
        let right = expr.right.accept(self);
        match expr.operator {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
        }
    }
}

pub fn evaluate(expr: &Expr) -> f64 {
    expr.accept(&mut Interpreter)
}
