//! Shared utilities for CLI commands

use miette::Result;
use tracing::debug;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, MaintenanceStore};

/// Load configuration and open the store it points at
pub fn open_store(global: &GlobalOpts) -> Result<(MaintenanceStore, Config)> {
    let config = Config::load();
    let path = config.database_path(global.db.as_deref());
    debug!(path = %path.display(), "resolved database path");

    let store = MaintenanceStore::open(&path)?;
    Ok((store, config))
}

/// Output format after applying the configured default
pub fn resolve_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    global.format.resolve(config.default_format.as_deref())
}
