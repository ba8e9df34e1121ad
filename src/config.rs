//! Configuration management for domblock.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Main configuration structure, read from `config.yml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sources to aggregate, in declaration order.
    pub input: Vec<Source>,

    /// Output artifact settings.
    pub output: OutputConfig,

    /// Fetch-phase tuning.
    pub fetch: FetchConfig,
}

impl Config {
    /// Load configuration from YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// An unknown source `type:` is not a validation error; it fails that
    /// one source at fetch time and the rest of the run proceeds.
    pub fn validate(&self) -> Result<()> {
        for source in &self.input {
            if source.name.trim().is_empty() {
                anyhow::bail!("Every source needs a non-empty name");
            }
            if source.data_uri.trim().is_empty() {
                anyhow::bail!("Source '{}' has an empty data_uri", source.name);
            }
            if source.kind == SourceKind::Remote
                && !source.data_uri.starts_with("http://")
                && !source.data_uri.starts_with("https://")
            {
                anyhow::bail!(
                    "Source '{}' is remote but data_uri is not an HTTP(S) URL: {}",
                    source.name,
                    source.data_uri
                );
            }
        }

        Ok(())
    }

    /// Generate default config with comments
    pub fn generate_default_yaml() -> String {
        include_str!("../templates/config.yml").to_string()
    }
}

/// One configured contributor of raw domain-list text.
#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    /// Display name, used in logs and per-source reports.
    pub name: String,

    /// Upstream project page; informational only, never fetched.
    #[serde(default)]
    pub repo_url: String,

    /// What actually gets fetched: a URL for remote sources, a filesystem
    /// path for local ones.
    pub data_uri: String,

    /// Origin kind. Missing defaults to `remote`.
    #[serde(rename = "type", default)]
    pub kind: SourceKind,

    /// True marks a whitelist contributor; absent means blacklist.
    #[serde(default)]
    pub whitelist: bool,
}

/// Where a source's data comes from. `repo` is accepted as an alias of
/// `remote` for compatibility with older configs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SourceKind {
    /// HTTP(S) endpoint fetched with GET
    #[default]
    Remote,
    /// File read from the local filesystem
    Local,
    /// Preserved verbatim; rejected per source at fetch time, not at
    /// config parse time
    Unknown(String),
}

impl From<String> for SourceKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "remote" | "repo" => SourceKind::Remote,
            "local" => SourceKind::Local,
            _ => SourceKind::Unknown(s),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Remote => f.write_str("remote"),
            SourceKind::Local => f.write_str("local"),
            SourceKind::Unknown(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the list files are written into
    pub dir: PathBuf,

    /// Also emit whitelist.txt alongside blacklist.txt and graylist.txt
    pub write_whitelist: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            write_whitelist: false,
        }
    }
}

impl OutputConfig {
    pub fn blacklist_path(&self) -> PathBuf {
        self.dir.join("blacklist.txt")
    }

    pub fn graylist_path(&self) -> PathBuf {
        self.dir.join("graylist.txt")
    }

    pub fn whitelist_path(&self) -> PathBuf {
        self.dir.join("whitelist.txt")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Simultaneous fetch tasks. 0 lifts the cap (one task per source).
    pub max_concurrent: usize,

    /// Per-request deadline in seconds. 0 disables it.
    pub timeout_secs: u64,

    /// Overall deadline for the whole fetch phase in seconds. 0 disables it.
    pub run_deadline_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_concurrent: 8,
            timeout_secs: 30,
            run_deadline_secs: 0,
        }
    }
}
