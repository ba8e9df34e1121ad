//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "domblock")]
#[command(author, version, about = "Domain blocklist aggregator with graylist derivation")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yml", global = true)]
    pub config: PathBuf,

    /// Quiet mode (errors only, for cron)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all sources and write the aggregated lists
    Run {
        /// Fetch, validate and aggregate but write no files
        #[arg(long)]
        dry_run: bool,
    },

    /// List configured sources
    Sources,

    /// Check whether a line is accepted as a valid domain
    Check {
        /// Domain (or raw list line) to check
        domain: String,
    },

    /// Write a starter config file
    Init,

    /// Show version
    Version,
}
