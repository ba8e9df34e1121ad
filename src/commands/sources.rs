//! Sources command implementation.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;

/// List the configured sources with role, kind and origin.
pub fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;

    let whitelist_count = config.input.iter().filter(|s| s.whitelist).count();

    println!();
    println!("Configured sources ({} total):", config.input.len());
    println!(
        "  Blacklist contributors: {}, whitelist contributors: {}",
        config.input.len() - whitelist_count,
        whitelist_count
    );
    println!();

    for source in &config.input {
        let role = if source.whitelist {
            "whitelist"
        } else {
            "blacklist"
        };
        println!("  [{}] {} ({})", role, source.name, source.kind);
        println!("      {}", source.data_uri);
        if !source.repo_url.is_empty() {
            println!("      from {}", source.repo_url);
        }
    }

    println!();
    println!("Use 'domblock run' to fetch and aggregate them");

    Ok(())
}
