//! Run command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{error, info, warn};

use crate::aggregator::graylist;
use crate::config::Config;
use crate::fetcher::Fetcher;
use crate::pipeline::{self, format_count};
use crate::writer::write_list;

/// Run the aggregation pipeline once to completion.
///
/// Per-source and per-output failures are logged and skipped; only a
/// config error aborts the run.
pub async fn run(dry_run: bool, config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    if config.input.is_empty() {
        warn!("No sources configured; the output lists will be empty.");
    }

    info!("Aggregating {} sources...", config.input.len());

    let fetcher = Fetcher::new(&config.fetch)?;
    let outcome = pipeline::collect(&fetcher, &config.input, &config.fetch).await;

    let failures = outcome.failure_count();
    if failures > 0 {
        warn!("{} of {} sources failed", failures, outcome.reports.len());
    }
    if !outcome.reports.is_empty() && failures == outcome.reports.len() {
        error!("No source could be fetched; writing lists from zero input");
    }

    let gray = graylist(&outcome.blacklist, &outcome.whitelist);
    info!(
        "Aggregated {} blacklist, {} whitelist, {} graylist domains",
        format_count(outcome.blacklist.len()),
        format_count(outcome.whitelist.len()),
        format_count(gray.len())
    );

    if dry_run {
        println!();
        println!(
            "[DRY RUN] Would write {} blacklist and {} graylist domains to {:?}",
            format_count(outcome.blacklist.len()),
            format_count(gray.len()),
            config.output.dir
        );
        return Ok(());
    }

    let mut targets = vec![
        (&outcome.blacklist, config.output.blacklist_path()),
        (&gray, config.output.graylist_path()),
    ];
    if config.output.write_whitelist {
        targets.push((&outcome.whitelist, config.output.whitelist_path()));
    }

    println!();
    // A failed output target is logged and skipped; the others are still
    // attempted and the run still exits successfully.
    for (set, path) in targets {
        match write_list(set, &path) {
            Ok(count) => {
                println!("[OK] {} - {} domains", path.display(), format_count(count))
            }
            Err(e) => error!("{}", e),
        }
    }

    Ok(())
}
