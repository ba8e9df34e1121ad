//! Init command implementation.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;

/// Write the starter configuration file, refusing to overwrite.
pub fn run(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        anyhow::bail!(
            "{:?} already exists; remove it or pass --config to pick another path",
            config_path
        );
    }

    std::fs::write(config_path, Config::generate_default_yaml())
        .with_context(|| format!("Failed to write {:?}", config_path))?;

    println!("[OK] Wrote starter config to {:?}", config_path);
    println!("     Edit the input list, then run 'domblock run'");

    Ok(())
}
