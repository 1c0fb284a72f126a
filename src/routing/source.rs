//! Where handlers get the current redirect table from.
//!
//! # Responsibilities
//! - Apply the configured refresh policy
//! - Hand each request an immutable `Arc<RedirectTable>` snapshot
//!
//! # Design Decisions
//! - `PerRequest` re-reads the store on the blocking pool for every request
//! - `Watched` keeps one snapshot in an `ArcSwap`; the file watcher replaces it
//! - Either way a malformed store degrades to an empty table

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::RefreshPolicy;
use crate::routing::table::RedirectTable;

/// Supplies redirect table snapshots according to a refresh policy.
#[derive(Clone, Debug)]
pub enum TableSource {
    /// Load the store from disk on every call.
    PerRequest { path: Arc<PathBuf> },
    /// Serve a cached snapshot, swapped out on reload.
    Watched {
        path: Arc<PathBuf>,
        current: Arc<ArcSwap<RedirectTable>>,
    },
}

impl TableSource {
    /// Build a source for `path` using the given refresh policy.
    ///
    /// The watched variant performs its initial load here.
    pub fn new(path: impl Into<PathBuf>, policy: RefreshPolicy) -> Self {
        let path = Arc::new(path.into());
        match policy {
            RefreshPolicy::PerRequest => TableSource::PerRequest { path },
            RefreshPolicy::Watch => {
                let table = RedirectTable::load_or_empty(&path);
                TableSource::Watched {
                    path,
                    current: Arc::new(ArcSwap::from_pointee(table)),
                }
            }
        }
    }

    /// A watched source starting from an already loaded `table`.
    pub fn watched(path: impl Into<PathBuf>, table: RedirectTable) -> Self {
        TableSource::Watched {
            path: Arc::new(path.into()),
            current: Arc::new(ArcSwap::from_pointee(table)),
        }
    }

    /// Path of the backing JSON store.
    pub fn path(&self) -> &Path {
        match self {
            TableSource::PerRequest { path } | TableSource::Watched { path, .. } => path.as_path(),
        }
    }

    /// Get the table to resolve the current request against.
    pub async fn current(&self) -> Arc<RedirectTable> {
        match self {
            TableSource::PerRequest { path } => {
                let path = Arc::clone(path);
                match tokio::task::spawn_blocking(move || RedirectTable::load_or_empty(&path)).await {
                    Ok(table) => Arc::new(table),
                    Err(e) => {
                        tracing::error!(error = %e, "Redirect store load task failed");
                        Arc::new(RedirectTable::default())
                    }
                }
            }
            TableSource::Watched { current, .. } => current.load_full(),
        }
    }

    /// Re-read the store into the cached snapshot.
    ///
    /// No-op for `PerRequest`, which never caches.
    pub fn reload(&self) {
        if let TableSource::Watched { path, current } = self {
            let table = RedirectTable::load_or_empty(path);
            tracing::info!(
                path = %path.display(),
                redirects = table.len(),
                "Redirect table reloaded"
            );
            current.store(Arc::new(table));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_store(tag: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "host-redirect-source-{}-{}",
            std::process::id(),
            tag
        ));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("redirects.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_per_request_sees_edits_immediately() {
        let path = scratch_store("per-request", r#"{"a.test": "https://one.test"}"#);
        let source = TableSource::new(&path, RefreshPolicy::PerRequest);

        assert_eq!(source.current().await.resolve("a.test"), Some("https://one.test"));

        fs::write(&path, r#"{"a.test": "https://two.test"}"#).unwrap();
        assert_eq!(source.current().await.resolve("a.test"), Some("https://two.test"));
    }

    #[tokio::test]
    async fn test_watched_keeps_snapshot_until_reload() {
        let path = scratch_store("watched", r#"{"a.test": "https://one.test"}"#);
        let source = TableSource::new(&path, RefreshPolicy::Watch);

        fs::write(&path, r#"{"a.test": "https://two.test"}"#).unwrap();
        assert_eq!(source.current().await.resolve("a.test"), Some("https://one.test"));

        source.reload();
        assert_eq!(source.current().await.resolve("a.test"), Some("https://two.test"));
    }

    #[tokio::test]
    async fn test_malformed_reload_empties_table() {
        let path = scratch_store("malformed", r#"{"a.test": "https://one.test"}"#);
        let source = TableSource::new(&path, RefreshPolicy::Watch);

        fs::write(&path, "{ broken").unwrap();
        source.reload();
        assert!(source.current().await.is_empty());

        fs::write(&path, r#"{"a.test": "https://fixed.test"}"#).unwrap();
        source.reload();
        assert_eq!(source.current().await.resolve("a.test"), Some("https://fixed.test"));
    }

    #[tokio::test]
    async fn test_watched_from_loaded_table_skips_store() {
        let dir = std::env::temp_dir().join(format!("host-redirect-source-{}-preloaded", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("redirects.json");
        let _ = fs::remove_file(&path);

        let table: RedirectTable = [("a.test", "https://one.test")].into_iter().collect();
        let source = TableSource::watched(&path, table.clone());

        assert_eq!(*source.current().await, table);
        // Loading would have seeded the missing store.
        assert!(!path.exists());
    }
}
