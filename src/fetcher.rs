//! Source retrieval: HTTP downloads and local file reads.

use anyhow::{Context, Result};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{FetchConfig, Source, SourceKind};
use crate::error::FetchError;

/// Maximum size per source payload (10 MB). The largest widely used
/// domain blocklists are around 2 MB.
pub const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Retrieves raw list text for sources, one call per source.
pub struct Fetcher {
    client: Client,
    timeout_secs: u64,
}

impl Fetcher {
    /// Create a fetcher configured from the `fetch:` config section.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(format!("domblock/{}", env!("CARGO_PKG_VERSION")));
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Retrieve the full raw text of one source.
    ///
    /// Errors are scoped to this source and never affect sibling fetches;
    /// the caller logs and continues. There is no retry: a failure is final
    /// for the run.
    pub async fn fetch(&self, source: &Source) -> Result<String, FetchError> {
        match &source.kind {
            SourceKind::Remote => self.fetch_remote(&source.data_uri).await,
            SourceKind::Local => self.fetch_local(&source.data_uri).await,
            SourceKind::Unknown(kind) => Err(FetchError::UnsupportedKind { kind: kind.clone() }),
        }
    }

    async fn fetch_remote(&self, url: &str) -> Result<String, FetchError> {
        self.fetch_remote_capped(url, MAX_SOURCE_SIZE).await
    }

    async fn fetch_remote_capped(&self, url: &str, cap: u64) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        // Check Content-Length before downloading the body
        if let Some(len) = response.content_length() {
            if len > cap {
                return Err(FetchError::TooLarge {
                    url: url.to_string(),
                    size: len,
                    cap,
                });
            }
        }

        let body = response.text().await.map_err(|e| self.classify(url, e))?;

        // The header can be absent or wrong; check the actual size too
        if body.len() as u64 > cap {
            return Err(FetchError::TooLarge {
                url: url.to_string(),
                size: body.len() as u64,
                cap,
            });
        }

        Ok(body)
    }

    async fn fetch_local(&self, path: &str) -> Result<String, FetchError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| FetchError::File {
            path: PathBuf::from(path),
            source: e,
        })?;
        // Lossy decode, same as the remote path: an invalid byte costs its
        // own line at validation, never the whole file.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Separate deadline hits from other transport failures so reports can
    /// tell a slow source from a broken one.
    fn classify(&self, url: &str, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout_secs,
            }
        } else {
            FetchError::Http {
                url: url.to_string(),
                source: err,
            }
        }
    }
}
