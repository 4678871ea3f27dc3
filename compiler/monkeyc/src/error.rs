//! Driver errors.
//!
//! The lexer itself cannot fail; everything here comes from I/O, argument
//! parsing, or the `--strict` policy of treating illegal characters as fatal.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    #[error("illegal character {ch:?} at byte {offset}")]
    IllegalCharacter { ch: char, offset: usize },

    #[error("{0}")]
    Usage(String),
}

impl DriverError {
    /// Whether the usage text should accompany this error.
    pub fn is_usage(&self) -> bool {
        matches!(self, DriverError::Usage(_))
    }
}
