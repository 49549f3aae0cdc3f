#![allow(clippy::module_inception)]

use std::io::{self, Write};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod printer;

extern crate regex;

/// Byte offset into the expression source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line holding `position` in `source`.
///
/// Returns the 1-based line number, the line text and the column of the
/// position inside that line. A position at the very end of the source
/// (where the end-of-input marker sits) resolves to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last line.
    let last = source.split_inclusive('\n').last().unwrap_or("");
    let line_number = (line_number - 1).max(1);
    Some((line_number, last.to_string(), last.trim_end_matches('\n').len()))
}


/// Prints `error` to stdout with a caret under its column in `source`.
pub fn display_error(error: &Error, source: &str) {
    // Nowhere left to report a failing stdout.
    let _ = write_error(&mut io::stdout().lock(), error, source);
}

pub fn write_error<W: Write>(out: &mut W, error: &Error, source: &str) -> io::Result<()> {
    /*
        error: message
           |
         1 | 1 + + 2
           | ----^
    */

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }

    let position = error.get_position();
    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return Ok(());
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    writeln!(out, "{:>padding$}", "|")?;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    writeln!(out, "{} | {}", line_string, line_text_removed.trim_end())?;

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    writeln!(out, "{:>padding$} {:->arrows$}", "|", "^")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
