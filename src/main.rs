//! Spoteezer - convert music links between Deezer and Spotify.
//!
//! Give it a track, album or artist link from one catalog and it finds the
//! same entity on the other: by ISRC when the catalogs share one, otherwise
//! through a sequence of progressively looser searches. Runs as a one-shot
//! CLI or as a small HTTP service.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod item;
pub mod resolver;
pub mod server;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so `--json` output stays parseable
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("spoteezer=info".parse()?))
        .init();

    cli::run_command(&args)
}
