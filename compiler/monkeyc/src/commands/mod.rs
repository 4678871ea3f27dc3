//! Driver commands.
//!
//! Every command writes to a caller-supplied `Write` so it can run against
//! stdout in the binary and against buffers in tests.

mod lex;
mod repl;
mod sample;

pub use lex::{lex_file, lex_source, LexOptions};
pub use repl::{run_repl, PROMPT};
pub use sample::{run_sample, SAMPLE};
