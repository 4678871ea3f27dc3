use std::io::Write;
use std::path::Path;

use monkey_lexer::{tokenize, Token};
use tracing::debug;

use crate::DriverError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Fail on the first illegal character instead of printing it as a token.
    pub strict: bool,
}

/// Lex a file and print its tokens.
#[tracing::instrument(level = "debug", skip(out))]
pub fn lex_file<W: Write>(
    path: &Path,
    options: LexOptions,
    out: &mut W,
) -> Result<usize, DriverError> {
    let source = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    writeln!(out, "Tokens for '{}':", path.display())?;
    lex_source(&source, options, out)
}

/// Print one line per token: kind name, quoted text, and byte span.
///
/// Returns the number of tokens printed, including the end-of-input token.
/// In strict mode nothing is printed when the source contains an illegal
/// character.
pub fn lex_source<W: Write>(
    source: &str,
    options: LexOptions,
    out: &mut W,
) -> Result<usize, DriverError> {
    let tokens = tokenize(source);
    debug!(count = tokens.len(), bytes = source.len(), "lexed source");

    if options.strict {
        if let Some(bad) = tokens.iter().find(|t| t.is_illegal()) {
            return Err(illegal_character(source, bad));
        }
    }

    for token in &tokens {
        writeln!(out, "  {} {:?} @ {}", token.kind, token.text, token.span)?;
    }
    Ok(tokens.len())
}

/// The placeholder text hides the offending character; the span does not.
fn illegal_character(source: &str, token: &Token<'_>) -> DriverError {
    let ch = token
        .span
        .slice(source)
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    DriverError::IllegalCharacter {
        ch,
        offset: token.span.start,
    }
}
