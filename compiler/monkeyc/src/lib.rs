//! Monkey lexer driver.
//!
//! Library half of the `monkey` binary: argument parsing, the three driver
//! commands, tracing setup, and the driver's error type.

pub mod cli;
pub mod commands;
mod error;
mod tracing_setup;

pub use error::DriverError;
pub use tracing_setup::init_tracing;
