//! Error types and error handling for the expression parser.
//!
//! Every failure raised while lexing or parsing is a syntax error. This
//! module defines:
//!
//! - The `Error` structure pairing a failure detail with its source position
//! - The `ErrorImpl` variants, one per unmet expectation
//! - Human-readable tips used when reporting errors

pub mod errors;
