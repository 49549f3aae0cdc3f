//! Lexical analysis module for arithmetic expressions.
//!
//! This module contains the lexer (tokenizer) that converts expression
//! source into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - Recognition of decimal numbers, the four arithmetic operators and parentheses
//! - Token position tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;
