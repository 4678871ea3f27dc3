//! Command-line parsing.
//!
//! Flags may appear before or after the positional argument.

use std::path::PathBuf;

use crate::commands::LexOptions;
use crate::DriverError;

pub const USAGE: &str = "\
Usage: monkey [command]

Commands:
  (none)              Lex the built-in sample and print its tokens
  lex <file>          Lex a file and print every token with its span
      --strict        Fail on the first illegal character
  repl                Read lines from stdin and print their tokens
  help                Show this message

Set RUST_LOG (e.g. RUST_LOG=monkey_lexer=trace) for debug logging.
";

/// A parsed invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Sample,
    Lex { path: PathBuf, options: LexOptions },
    Repl,
    Help,
}

impl Command {
    /// Parse the arguments following the program name.
    pub fn parse(args: &[String]) -> Result<Self, DriverError> {
        let Some(command) = args.first() else {
            return Ok(Command::Sample);
        };

        match command.as_str() {
            "lex" => {
                let mut options = LexOptions::default();
                let mut path = None;
                for arg in &args[1..] {
                    if arg == "--strict" {
                        options.strict = true;
                    } else if arg.starts_with('-') {
                        return Err(DriverError::Usage(format!("unknown option '{arg}'")));
                    } else if path.is_none() {
                        path = Some(PathBuf::from(arg));
                    } else {
                        return Err(DriverError::Usage(format!("unexpected argument '{arg}'")));
                    }
                }
                let path =
                    path.ok_or_else(|| DriverError::Usage("missing file path".to_string()))?;
                Ok(Command::Lex { path, options })
            }
            "repl" => Ok(Command::Repl),
            "help" | "--help" | "-h" => Ok(Command::Help),
            other => Err(DriverError::Usage(format!("unknown command '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn no_arguments_runs_sample() {
        assert_eq!(Command::parse(&[]).ok(), Some(Command::Sample));
    }

    #[test]
    fn lex_with_path() {
        assert_eq!(
            Command::parse(&args(&["lex", "main.mk"])).ok(),
            Some(Command::Lex {
                path: PathBuf::from("main.mk"),
                options: LexOptions { strict: false },
            })
        );
    }

    #[test]
    fn strict_flag_before_or_after_path() {
        let expected = Some(Command::Lex {
            path: PathBuf::from("a.mk"),
            options: LexOptions { strict: true },
        });
        assert_eq!(Command::parse(&args(&["lex", "--strict", "a.mk"])).ok(), expected);
        assert_eq!(Command::parse(&args(&["lex", "a.mk", "--strict"])).ok(), expected);
    }

    #[test]
    fn lex_without_path_is_usage_error() {
        let err = Command::parse(&args(&["lex"])).err();
        assert!(matches!(err, Some(DriverError::Usage(ref m)) if m == "missing file path"));
    }

    #[test]
    fn unknown_option_is_usage_error() {
        let err = Command::parse(&args(&["lex", "--fast", "a.mk"])).err();
        assert!(err.is_some_and(|e| e.is_usage()));
    }

    #[test]
    fn second_path_is_usage_error() {
        let err = Command::parse(&args(&["lex", "a.mk", "b.mk"])).err();
        assert!(err.is_some_and(|e| e.is_usage()));
    }

    #[test]
    fn repl_and_help() {
        assert_eq!(Command::parse(&args(&["repl"])).ok(), Some(Command::Repl));
        assert_eq!(Command::parse(&args(&["help"])).ok(), Some(Command::Help));
        assert_eq!(Command::parse(&args(&["-h"])).ok(), Some(Command::Help));
    }

    #[test]
    fn unknown_command() {
        let err = Command::parse(&args(&["parse"])).err();
        assert_eq!(
            err.map(|e| e.to_string()),
            Some("unknown command 'parse'".to_string())
        );
    }
}
