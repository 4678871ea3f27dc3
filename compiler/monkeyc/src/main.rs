//! Monkey lexer CLI.

use std::io::{self, Write};
use std::process::ExitCode;

use monkeyc::cli::{Command, USAGE};
use monkeyc::{commands, init_tracing, DriverError};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if err.is_usage() {
                eprintln!();
                eprint!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), DriverError> {
    let command = Command::parse(args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Sample => commands::run_sample(&mut out)?,
        Command::Lex { path, options } => {
            commands::lex_file(&path, options, &mut out)?;
        }
        Command::Repl => commands::run_repl(io::stdin().lock(), &mut out)?,
        Command::Help => write!(out, "{USAGE}")?,
    }
    out.flush()?;
    Ok(())
}
