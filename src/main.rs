//! domblock - Domain Blocklist Aggregator
//!
//! Collects domain blocklists from remote and local sources and derives
//! deterministic blacklist/graylist files.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use domblock::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Run { dry_run } => domblock::commands::run::run(dry_run, &cli.config).await,
        Commands::Sources => domblock::commands::sources::run(&cli.config),
        Commands::Check { domain } => domblock::commands::check::run(&domain),
        Commands::Init => domblock::commands::init::run(&cli.config),
        Commands::Version => {
            println!("domblock {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
