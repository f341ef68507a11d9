use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use findroot::ResolverConfig;
use std::path::PathBuf;

/// Your CLI entrypoint definition
#[derive(Parser)]
#[command(
    name = "findroot",
    version,
    about = "Finds the root of the working tree you are standing in.",
    long_about = None
)]
pub struct Cli {
    /// Log every probe to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the nearest ancestor directory containing the marker
    Find {
        /// Where to start looking (defaults to the current directory)
        path: Option<PathBuf>,

        #[command(flatten)]
        marker: MarkerArgs,
    },
    /// List each directory the search visits, stopping at the root
    Ancestors {
        /// Where to start looking (defaults to the current directory)
        path: Option<PathBuf>,

        #[command(flatten)]
        marker: MarkerArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct MarkerArgs {
    /// Entry that identifies a root directory (e.g. .git, .hg, .jj)
    #[arg(long, value_name = "NAME")]
    pub marker: Option<String>,

    /// TOML file providing the marker
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl MarkerArgs {
    /// `--marker` beats `--config`, which beats the built-in default.
    pub fn resolve(&self) -> Result<ResolverConfig> {
        if let Some(marker) = &self.marker {
            return Ok(ResolverConfig::with_marker(marker.as_str())?);
        }

        match &self.config {
            Some(path) => ResolverConfig::load(path),
            None => Ok(ResolverConfig::default()),
        }
    }
}

/// Turns an optional user-supplied path into an absolute starting point, so
/// the walk is not cut short at `.` for relative input.
pub fn start_path(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    Ok(std::path::absolute(path)?)
}
