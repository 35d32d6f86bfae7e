//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// binup - update a binary from an HTTP repository
#[derive(Parser, Debug)]
#[command(name = "binup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Repository listing URL
    #[arg(long, global = true)]
    pub repository: Option<String>,

    /// Base name of the published binaries
    #[arg(long, global = true)]
    pub binary_name: Option<String>,

    /// Binary to replace (default: the running executable)
    #[arg(long, global = true)]
    pub target_path: Option<PathBuf>,

    /// Target OS as named in the repository (default: running OS)
    #[arg(long, global = true)]
    pub os: Option<String>,

    /// Target architecture as named in the repository (default: running architecture)
    #[arg(long, global = true)]
    pub arch: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the latest eligible build
    Check,

    /// List all eligible builds, oldest first
    List,

    /// Install the latest eligible build
    Update(UpdateArgs),
}

// Update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Version currently installed; skip the update unless the latest build is newer
    #[arg(long)]
    pub current_version: Option<String>,

    /// Install the latest build even if it is not newer
    #[arg(long)]
    pub force: bool,
}
