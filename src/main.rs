//! findroot CLI
//!
//! Prints the root of the working tree containing a path, or the trail of
//! directories it checked on the way up.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, start_path};
use commands::{ancestors::run_ancestors, find::run_find};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Find { path, marker } => {
            let config = marker.resolve()?;
            run_find(&start_path(path)?, config).await?;
        }

        Commands::Ancestors { path, marker } => {
            let config = marker.resolve()?;
            run_ancestors(&start_path(path)?, config).await?;
        }
    }

    Ok(())
}

// RUST_LOG wins over --verbose when both are set
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "findroot=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
