//! Parser module for building an expression tree.
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an `Expr` tree. It has one function per
//! precedence level:
//!
//! - `expression` for `+` and `-`
//! - `term` for `*` and `/`
//! - `factor` for numbers, parenthesised groups and prefix signs
//!
//! Two identical signs may not follow each other directly (`1 ++ 2`,
//! `--3`). The parser tracks the last sign it consumed and scopes that
//! state around prefix operands and parenthesised groups.

pub mod expr;
pub mod parser;

#[cfg(test)]
mod tests;
