//! Error types for domblock.
//!
//! Only the two recoverable, scoped failures get typed errors: a fetch
//! failure belongs to one source and a write failure belongs to one output
//! file; neither may take down the run. Configuration problems are fatal
//! and travel as `anyhow` errors with context instead.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to retrieve one source. Scoped to that source: the pipeline
/// logs it and keeps going with the remaining sources.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure (DNS, connect, TLS, broken transfer).
    #[error("GET {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("GET {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The per-request deadline elapsed before the body arrived.
    #[error("GET {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    /// The payload exceeds the per-source size cap.
    #[error("{url} is too large ({size} bytes, cap {cap})")]
    TooLarge { url: String, size: u64, cap: u64 },

    /// A local source file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source declares a `type:` this tool does not know.
    #[error("unsupported source type '{kind}'")]
    UnsupportedKind { kind: String },
}

impl FetchError {
    /// True when the failure was a deadline, either per-request or the
    /// overall run deadline cutting the source off.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }
}

/// Failure to produce one output file. Scoped to that file: the other
/// output targets are still attempted.
#[derive(Error, Debug)]
#[error("failed to write {}: {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
