//! Deterministic serialization of domain sets to disk.

use std::collections::HashSet;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::Domain;
use crate::error::WriteError;

/// Write a domain set to `path`: ascending byte-wise order, one domain per
/// line, trailing newline, UTF-8.
///
/// The parent directory is created if missing. Content goes to a temporary
/// sibling file first and is atomically renamed into place, so a crashed
/// run never leaves a truncated list behind. Returns the number of domains
/// written; failure is scoped to this one output target.
pub fn write_list(set: &HashSet<Domain>, path: &Path) -> Result<usize, WriteError> {
    let fail = |source: std::io::Error| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(fail)?;

    let mut domains: Vec<&Domain> = set.iter().collect();
    domains.sort();

    let temp = NamedTempFile::new_in(parent).map_err(fail)?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        for domain in &domains {
            writeln!(writer, "{domain}").map_err(fail)?;
        }
        writer.flush().map_err(fail)?;
    }
    temp.as_file().sync_all().map_err(fail)?;
    temp.persist(path).map_err(|e| fail(e.error))?;

    debug!("Wrote {} domains to {}", domains.len(), path.display());
    Ok(domains.len())
}
