use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bundlemap - artifact naming and output reconciliation for packaged content
#[derive(Parser, Debug)]
#[command(name = "bundlemap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root containing the content marker directory
    #[arg(short, long, global = true, default_value = ".")]
    pub project: PathBuf,

    /// Config file (defaults to <project>/bundlemap.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Platform name; overrides config and BUNDLEMAP_PLATFORM
    #[arg(long, global = true)]
    pub platform: Option<String>,

    /// Version stamped on manifest records
    #[arg(long = "build-version", global = true)]
    pub build_version: Option<String>,

    /// Suffix identifiers with the source content hash
    #[arg(long, global = true)]
    pub append_hash: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assign identifiers, bundle, reconcile the output and write manifests
    Build {
        /// Only assign identifiers; touch neither output nor manifests
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove stale artifacts from the output directory
    Reconcile,
}
