//! Concurrent collection of every source into the shared domain sets.

use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::aggregator::{Aggregator, ListKind};
use crate::config::{FetchConfig, Source};
use crate::domain::{normalize, Domain};
use crate::error::FetchError;
use crate::fetcher::Fetcher;

/// Terminal state of one source's fetch task.
#[derive(Debug)]
pub enum SourceOutcome {
    /// The source was retrieved and its lines were run through validation.
    Fetched { lines: usize, accepted: usize },
    /// The source contributed nothing.
    Failed(FetchError),
}

/// Per-source result, reported once the task finishes.
///
/// The counters are owned by the task while it runs; no synchronization is
/// needed for them.
#[derive(Debug)]
pub struct SourceReport {
    pub name: String,
    pub outcome: SourceOutcome,
}

impl SourceReport {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, SourceOutcome::Failed(_))
    }
}

/// Everything the fetch phase produced: the frozen sets plus one report
/// per configured source, in configuration order.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub blacklist: HashSet<Domain>,
    pub whitelist: HashSet<Domain>,
    pub reports: Vec<SourceReport>,
}

impl PipelineOutcome {
    pub fn failure_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_failure()).count()
    }
}

/// Fetch every source, validate line by line, and merge into the shared
/// sets.
///
/// Fan-out is bounded by `config.max_concurrent` (0 lifts the cap, one
/// slot per source). With `config.run_deadline_secs` set, the whole fetch
/// phase is cut off at that deadline and unfinished sources are reported
/// as timed out; domains already inserted stay in the sets.
///
/// Returns only after every fetch future has finished or been cancelled,
/// so nothing can still be mutating the sets when the caller derives the
/// graylist.
pub async fn collect(
    fetcher: &Fetcher,
    sources: &[Source],
    config: &FetchConfig,
) -> PipelineOutcome {
    let aggregator = Aggregator::new();
    let mut indexed: Vec<(usize, SourceReport)> = Vec::with_capacity(sources.len());

    let concurrency = if config.max_concurrent == 0 {
        sources.len().max(1)
    } else {
        config.max_concurrent
    };
    debug!(
        "Fetching {} sources with up to {} in flight",
        sources.len(),
        concurrency
    );

    {
        let agg = &aggregator;
        let mut tasks = stream::iter(sources.iter().enumerate().map(|(index, source)| async move {
            (index, process_source(fetcher, agg, source).await)
        }))
        .buffer_unordered(concurrency);

        let deadline = async {
            match config.run_deadline_secs {
                0 => std::future::pending::<()>().await,
                secs => tokio::time::sleep(Duration::from_secs(secs)).await,
            }
        };
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                next = tasks.next() => match next {
                    Some(result) => indexed.push(result),
                    None => break,
                },
                _ = &mut deadline => {
                    warn!(
                        "Run deadline of {}s reached, cancelling outstanding fetches",
                        config.run_deadline_secs
                    );
                    break;
                }
            }
        }
        // Dropping the stream here cancels every outstanding fetch future
        // and ends their borrow of the aggregator: the join barrier.
    }

    let mut finished = vec![false; sources.len()];
    for (index, _) in &indexed {
        finished[*index] = true;
    }
    for (index, source) in sources.iter().enumerate() {
        if !finished[index] {
            indexed.push((
                index,
                SourceReport {
                    name: source.name.clone(),
                    outcome: SourceOutcome::Failed(FetchError::Timeout {
                        url: source.data_uri.clone(),
                        timeout_secs: config.run_deadline_secs,
                    }),
                },
            ));
        }
    }
    indexed.sort_by_key(|(index, _)| *index);

    let (blacklist, whitelist) = aggregator.into_sets();
    PipelineOutcome {
        blacklist,
        whitelist,
        reports: indexed.into_iter().map(|(_, report)| report).collect(),
    }
}

/// Run one source end to end: fetch, then stream each line through
/// validation into the set matching the source's role.
async fn process_source(
    fetcher: &Fetcher,
    aggregator: &Aggregator,
    source: &Source,
) -> SourceReport {
    info!("Fetching {}...", source.name);

    let content = match fetcher.fetch(source).await {
        Ok(content) => content,
        Err(err) => {
            warn!("Failed to fetch {}: {}", source.name, err);
            return SourceReport {
                name: source.name.clone(),
                outcome: SourceOutcome::Failed(err),
            };
        }
    };

    let destination = if source.whitelist {
        ListKind::Whitelist
    } else {
        ListKind::Blacklist
    };

    let mut lines = 0usize;
    let mut accepted = 0usize;
    for line in content.lines() {
        lines += 1;
        if let Some(domain) = normalize(line) {
            aggregator.insert(domain, destination).await;
            accepted += 1;
        }
    }

    info!(
        "Fetched {} - {} domains",
        source.name,
        format_count(accepted)
    );
    SourceReport {
        name: source.name.clone(),
        outcome: SourceOutcome::Fetched { lines, accepted },
    }
}

/// Format a count with K/M suffix
pub fn format_count(count: usize) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}
