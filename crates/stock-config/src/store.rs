//! Item store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Database file name used when `store.path` is not set.
pub const DEFAULT_DB_FILE: &str = "app_database.db";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Database file path. Empty means `<data_dir>/stockroom/app_database.db`.
    #[serde(default)]
    pub path: String,

    /// JSONL snapshot loaded on first open instead of the bundled seed.
    #[serde(default)]
    pub seed_path: String,
}

impl StoreConfig {
    /// Resolve the database path, falling back to the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoDataDir` if `path` is empty and the platform has
    /// no data directory.
    pub fn resolved_path(&self) -> Result<PathBuf, ConfigError> {
        if !self.path.is_empty() {
            return Ok(PathBuf::from(&self.path));
        }
        crate::app_data_dir()
            .map(|dir| dir.join(DEFAULT_DB_FILE))
            .ok_or_else(|| ConfigError::NoDataDir {
                field: "store.path".into(),
            })
    }

    /// The configured seed override, if any.
    #[must_use]
    pub fn seed_override(&self) -> Option<PathBuf> {
        if self.seed_path.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.seed_path))
        }
    }
}
