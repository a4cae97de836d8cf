//! Bundlemap CLI
//!
//! Usage: bundlemap [OPTIONS] <COMMAND>
//!
//! Commands:
//!   build      Assign identifiers, bundle, reconcile and write manifests
//!   reconcile  Remove stale artifacts from the output directory

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = commands::RunOptions::from_cli(&cli);
    match cli.command {
        Commands::Build { dry_run } => commands::build::cmd_build(&options, dry_run),
        Commands::Reconcile => commands::reconcile::cmd_reconcile(&options),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from warn.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
