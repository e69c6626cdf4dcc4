//! Log output settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Log file name used when `logging.file` is not set.
pub const DEFAULT_LOG_FILE: &str = "stock.log";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// File that receives logs while the terminal UI owns the screen.
    /// Empty means `<data_dir>/stockroom/stock.log`.
    #[serde(default)]
    pub file: String,
}

impl LoggingConfig {
    /// Resolve the log file path. `None` when no data directory exists.
    #[must_use]
    pub fn resolved_file(&self) -> Option<PathBuf> {
        if self.file.is_empty() {
            crate::app_data_dir().map(|dir| dir.join(DEFAULT_LOG_FILE))
        } else {
            Some(PathBuf::from(&self.file))
        }
    }
}
