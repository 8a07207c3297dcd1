//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `convert`: one-shot link conversion (also the default without a subcommand)
//! - `serve`: the HTTP conversion endpoint

mod convert;
mod serve;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::catalog::Catalogs;
use crate::config::{self, Config};
use crate::convert::{ConversionService, HttpRedirectResolver};
use crate::error::{Error, ResultExt};

pub use convert::cmd_convert;
pub use serve::cmd_serve;

/// Convert Deezer links to Spotify and back
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Deezer or Spotify link to convert
    pub url: Option<String>,

    /// Print the JSON envelope instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Config file (default: the OS config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Spotify access token (or set SPOTIFY_ACCESS_TOKEN env var)
    #[arg(long, global = true, env = "SPOTIFY_ACCESS_TOKEN", hide_env_values = true)]
    pub spotify_token: Option<String>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a single link
    Convert {
        /// Deezer or Spotify link
        url: String,
        /// Print the JSON envelope instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Serve POST /convert over HTTP
    Serve {
        /// Address to listen on (default from config: 127.0.0.1:8080)
        #[arg(short, long)]
        bind: Option<String>,
    },
}

/// Run the command line.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;

    match (&cli.command, &cli.url) {
        (Some(Commands::Convert { url, json }), _) => {
            let rt = Runtime::new()?;
            cmd_convert(&rt, &build_service(&config)?, url, *json)
        }
        (Some(Commands::Serve { bind }), _) => {
            let rt = Runtime::new()?;
            let bind = bind.as_deref().unwrap_or(&config.server.bind);
            cmd_serve(&rt, build_service(&config)?, bind)
        }
        (None, Some(url)) => {
            let rt = Runtime::new()?;
            cmd_convert(&rt, &build_service(&config)?, url, cli.json)
        }
        (None, None) => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Config file plus command-line overrides
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load(),
    };

    if let Some(token) = &cli.spotify_token {
        config.credentials.spotify_access_token = Some(token.clone());
    }
    if config.credentials.spotify_access_token.is_none() {
        tracing::warn!("No Spotify access token configured; Spotify requests will be rejected");
    }

    Ok(config)
}

fn build_service(config: &Config) -> anyhow::Result<ConversionService> {
    let catalogs = Catalogs::from_config(config)
        .map_err(|e| Error::config(e.to_string()))
        .with_context("Failed to set up catalog clients")?;
    let redirects =
        HttpRedirectResolver::new(&config.http).with_context("Failed to set up link resolver")?;

    Ok(ConversionService::new(catalogs, Arc::new(redirects)))
}
