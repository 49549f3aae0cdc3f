//! Numeric evaluation of expression trees.

pub mod interpreter;
