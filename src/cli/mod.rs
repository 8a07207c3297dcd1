//! Command-line interface for spoteezer.
//!
//! Converts a single link from the terminal, or runs the web handler.

mod commands;

pub use commands::{Cli, Commands, run_command};
