//! Redirect store watcher for hot reload.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::routing::TableSource;

/// A watcher that reloads a [`TableSource`] when its store changes.
pub struct TableWatcher {
    source: TableSource,
}

impl TableWatcher {
    /// Create a new TableWatcher for a watched table source.
    pub fn new(source: TableSource) -> Self {
        Self { source }
    }

    /// Start watching the store in a background thread.
    ///
    /// The parent directory is watched rather than the file itself so that
    /// editors replacing the file by rename are still noticed. The returned
    /// watcher must be kept alive for reloads to continue.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let store = self.source.path().to_path_buf();
        let dir = watch_dir(&store);
        let file_name = store.file_name().map(OsString::from);
        let source = self.source;

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if is_reload_event(&event.kind) && touches(&event, file_name.as_deref()) {
                        tracing::info!("Redirect store change detected, reloading...");
                        source.reload();
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?store, "Redirect store watcher started");
        Ok(watcher)
    }
}

fn watch_dir(store: &Path) -> PathBuf {
    match store.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn is_reload_event(kind: &EventKind) -> bool {
    kind.is_modify() || kind.is_create() || kind.is_remove()
}

fn touches(event: &Event, file_name: Option<&std::ffi::OsStr>) -> bool {
    match file_name {
        Some(name) => event.paths.iter().any(|p| p.file_name() == Some(name)),
        None => true,
    }
}
