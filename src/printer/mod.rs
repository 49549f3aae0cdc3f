//! Text rendering of expression trees.
//!
//! Produces the compact per-node labels (`OP: +`, `UNARY_OP: -`,
//! `NUMBER: 4`) and the indented branch diagram of a whole tree.

pub mod printer;
