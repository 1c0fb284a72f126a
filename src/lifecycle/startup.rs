//! Startup orchestration.
//!
//! # Responsibilities
//! - Seed and load the redirect store
//! - Log the configured redirects
//! - Build the table source and, for the watch policy, start the watcher
//!
//! # Design Decisions
//! - A malformed store at startup is logged, not fatal
//! - A watcher that cannot start is fatal: the watch policy would silently stop reloading

use notify::RecommendedWatcher;

use crate::config::watcher::TableWatcher;
use crate::config::{RefreshPolicy, TableConfig};
use crate::routing::{RedirectTable, TableSource};

/// Everything the server needs from startup.
pub struct Prepared {
    pub source: TableSource,
    /// Present under the watch policy; dropping it stops reloads.
    pub watcher: Option<RecommendedWatcher>,
}

/// Load the redirect store described by `config` and log its contents.
pub fn prepare_table(config: &TableConfig) -> Result<Prepared, notify::Error> {
    tracing::info!(
        path = %config.path.display(),
        refresh = %config.refresh,
        "Redirect store"
    );

    let table = RedirectTable::load_or_empty(&config.path);
    log_redirects(&table);

    let prepared = match config.refresh {
        RefreshPolicy::Watch => {
            let source = TableSource::watched(config.path.clone(), table);
            let watcher = TableWatcher::new(source.clone()).run()?;
            Prepared {
                source,
                watcher: Some(watcher),
            }
        }
        RefreshPolicy::PerRequest => Prepared {
            source: TableSource::new(config.path.clone(), RefreshPolicy::PerRequest),
            watcher: None,
        },
    };

    Ok(prepared)
}

/// Log one line per configured redirect.
pub fn log_redirects(table: &RedirectTable) {
    if table.is_empty() {
        tracing::warn!("No redirects configured");
        return;
    }

    tracing::info!(count = table.len(), "Configured redirects");
    for (from, to) in table.iter() {
        tracing::info!("  {} -> {}", from, to);
    }
}
