//! # domblock - Domain Blocklist Aggregator
//!
//! Aggregates domain-name blocklists from many heterogeneous sources
//! (remote endpoints and local files), validates and normalizes every
//! entry, deduplicates across sources, and derives a graylist
//! (blacklist minus whitelist). Output is a deterministic, sorted,
//! newline-delimited domain list.
//!
//! ## Features
//!
//! - **Concurrent fetching** - Sources are retrieved in parallel through a
//!   bounded worker pool
//! - **Isolated failures** - A broken source contributes nothing but never
//!   aborts the run
//! - **Strict validation** - Every line must match the domain grammar;
//!   comments and garbage are silently dropped
//! - **Whitelist-aware** - Whitelist-role sources subtract from the
//!   derived graylist
//! - **Deterministic output** - Sorted, deduplicated, byte-identical
//!   across runs for identical input
//! - **Atomic writes** - Lists are renamed into place; a crash never
//!   leaves a truncated file
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        domblock                            │
//! ├────────────────────────────────────────────────────────────┤
//! │  CLI (clap)                                                │
//! │    └── Commands: run, sources, check, init, version        │
//! ├────────────────────────────────────────────────────────────┤
//! │  Config (serde_yaml)                                       │
//! │    └── input sources, output targets, fetch tuning         │
//! ├────────────────────────────────────────────────────────────┤
//! │  Pipeline (futures buffer_unordered)                       │
//! │    ├── Fetcher (reqwest + rustls, tokio::fs)               │
//! │    ├── Validator (regex domain grammar)                    │
//! │    └── Aggregator (independently locked sets)              │
//! ├────────────────────────────────────────────────────────────┤
//! │  Derivation (graylist = blacklist - whitelist)             │
//! ├────────────────────────────────────────────────────────────┤
//! │  Writer (sorted, atomic rename via tempfile)               │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```no_run
//! use domblock::aggregator::graylist;
//! use domblock::config::Config;
//! use domblock::fetcher::Fetcher;
//! use domblock::{pipeline, writer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.yml")?;
//!
//!     // Fetch every source concurrently; the join barrier is implicit
//!     // in collect() returning.
//!     let fetcher = Fetcher::new(&config.fetch)?;
//!     let outcome = pipeline::collect(&fetcher, &config.input, &config.fetch).await;
//!
//!     let gray = graylist(&outcome.blacklist, &outcome.whitelist);
//!     writer::write_list(&outcome.blacklist, &config.output.blacklist_path())?;
//!     writer::write_list(&gray, &config.output.graylist_path())?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`aggregator`] - Concurrent accumulation and graylist derivation
//! - [`cli`] - Command-line interface definitions
//! - [`commands`] - CLI command implementations
//! - [`config`] - Configuration parsing and validation
//! - [`domain`] - Domain grammar validation and normalization
//! - [`error`] - Scoped error types (per-source, per-output)
//! - [`fetcher`] - HTTP and local-file source retrieval
//! - [`pipeline`] - The fetch, validate and merge coordinator
//! - [`writer`] - Deterministic, atomic list serialization

pub mod aggregator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod pipeline;
pub mod writer;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use domain::Domain;
