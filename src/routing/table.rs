//! Host → destination table backed by a JSON file.
//!
//! # Responsibilities
//! - Load the redirect store, seeding it with example entries on first run
//! - Resolve a request host to a destination base URL
//!
//! # Design Decisions
//! - Keys are matched exactly as stored (no case folding)
//! - `www.` normalization is an ordered sequence of exact lookups, never fuzzy
//! - A store that fails to parse yields an empty table, never a crash
//! - Entries whose destination is not an absolute URL are dropped at load

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const WWW_PREFIX: &str = "www.";

/// Errors raised while loading the redirect store.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read redirect store: {0}")]
    Io(#[from] io::Error),

    #[error("redirect store is not a host-to-URL object: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to seed redirect store at {path}: {source}")]
    Seed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// In-memory mapping of hostname to destination base URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedirectTable {
    entries: BTreeMap<String, String>,
}

impl RedirectTable {
    /// The example mappings written when no store exists yet.
    pub fn seed() -> Self {
        [
            ("old-site.com", "https://new-site.com"),
            ("blog.old-site.com", "https://new-site.com/blog"),
            ("www.example.com", "https://newexample.com"),
            ("legacy-domain.com", "https://modern-domain.com"),
        ]
        .into_iter()
        .collect()
    }

    /// Load the store at `path`, creating it from [`RedirectTable::seed`] if absent.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        if !path.exists() {
            write_seed(path)?;
        }

        let content = fs::read_to_string(path)?;
        let mut table: RedirectTable = serde_json::from_str(&content)?;
        table.entries.retain(|host, destination| {
            let absolute = url::Url::parse(destination).is_ok();
            if !absolute {
                tracing::warn!(
                    host = %host,
                    destination = %destination,
                    "Skipping redirect without an absolute destination URL"
                );
            }
            absolute
        });
        Ok(table)
    }

    /// Like [`RedirectTable::load`], but any failure is logged and yields an empty table.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(table) => table,
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Error loading redirects, no redirects are configured"
                );
                Self::default()
            }
        }
    }

    /// Resolve `host` to its destination base URL.
    ///
    /// Tried in order, first hit wins: the exact host, the host without a
    /// leading `www.`, then the host with `www.` prepended. An empty
    /// destination never counts as a hit.
    pub fn resolve(&self, host: &str) -> Option<&str> {
        if let Some(destination) = self.lookup(host) {
            return Some(destination);
        }

        if let Some(bare) = host.strip_prefix(WWW_PREFIX) {
            if let Some(destination) = self.lookup(bare) {
                return Some(destination);
            }
        }

        self.lookup(&format!("{WWW_PREFIX}{host}"))
    }

    fn lookup(&self, host: &str) -> Option<&str> {
        self.entries
            .get(host)
            .map(String::as_str)
            .filter(|destination| !destination.is_empty())
    }

    /// Iterate over `(host, destination)` pairs in host order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H, D> FromIterator<(H, D)> for RedirectTable
where
    H: Into<String>,
    D: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (H, D)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(h, d)| (h.into(), d.into()))
                .collect(),
        }
    }
}

/// Write the seed table to `path` unless another writer got there first.
fn write_seed(path: &Path) -> Result<(), TableError> {
    let seed_err = |source: io::Error| TableError::Seed {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_string_pretty(&RedirectTable::seed())
        .map_err(|e| seed_err(e.into()))?;

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(()),
        Err(e) => return Err(seed_err(e)),
    };
    file.write_all(json.as_bytes()).map_err(seed_err)?;

    tracing::info!(path = %path.display(), "Created redirect store with default redirects");
    Ok(())
}
