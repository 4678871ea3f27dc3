use std::io::{BufRead, Write};

use monkey_lexer::Scanner;
use tracing::debug;

use crate::DriverError;

pub const PROMPT: &str = "... ";

/// Read lines until `input` is exhausted, printing each line's tokens.
///
/// A line stops at its first end-of-input or illegal token; the rest of that
/// line is discarded.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_repl<R: BufRead, W: Write>(mut input: R, out: &mut W) -> Result<(), DriverError> {
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).map_err(DriverError::Input)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let mut scanner = Scanner::new(&line);
        loop {
            let token = scanner.next_token();
            writeln!(out, "{token}")?;
            if token.is_eof() {
                break;
            }
            if token.is_illegal() {
                debug!(offset = token.span.start, "line abandoned at illegal character");
                break;
            }
        }
    }
}
