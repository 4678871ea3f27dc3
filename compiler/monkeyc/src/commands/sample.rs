use std::io::Write;

use monkey_lexer::Scanner;

use crate::DriverError;

/// Input lexed when the binary runs without arguments.
pub const SAMPLE: &str = "let x = 5 + 10;";

/// Print every token of [`SAMPLE`] in structured form, one per line,
/// ending with the end-of-input token.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_sample<W: Write>(out: &mut W) -> Result<(), DriverError> {
    let mut scanner = Scanner::new(SAMPLE);
    loop {
        let token = scanner.next_token();
        writeln!(out, "{token}")?;
        if token.is_eof() {
            break;
        }
    }
    Ok(())
}
