//! # stock-config
//!
//! Layered configuration loading for Stockroom using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STOCK_*` prefix, `__` as separator)
//! 2. Project-level `.stockroom/config.toml`
//! 3. User-level `~/.config/stockroom/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STOCK_STORE__PATH` -> `store.path`,
//! `STOCK_LOGGING__FILE` -> `logging.file`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use stock_config::StockConfig;
//!
//! let config = StockConfig::load_with_dotenv().expect("config");
//! let db_path = config.store.resolved_path().expect("db path");
//! println!("database: {}", db_path.display());
//! ```

mod error;
mod general;
mod logging;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use logging::{DEFAULT_LOG_FILE, LoggingConfig};
pub use store::{DEFAULT_DB_FILE, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory name under the platform config and data directories.
pub const APP_DIR: &str = "stockroom";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "STOCK_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StockConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StockConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".stockroom/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would only fail later at render time.
    fn validate(&self) -> Result<(), ConfigError> {
        if !stock_core::time::is_valid_format(&self.general.date_format) {
            return Err(ConfigError::InvalidValue {
                field: "general.date_format".into(),
                reason: format!(
                    "'{}' is not a valid chrono format string",
                    self.general.date_format
                ),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_DIR).join("config.toml"))
    }
}

/// `<data_dir>/stockroom`, the home of the default database and log file.
#[must_use]
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = StockConfig::default();
        assert!(config.store.path.is_empty());
        assert!(config.store.seed_override().is_none());
        assert_eq!(config.general.date_format, "%d.%m.%Y");
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = StockConfig::figment();
        let config: StockConfig = figment.extract().expect("should extract defaults");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_date_format_is_rejected() {
        let mut config = StockConfig::default();
        config.general.date_format = "  ".into();
        let err = config.validate().expect_err("should reject");
        assert!(err.to_string().contains("general.date_format"));
    }

    #[test]
    fn unknown_date_specifier_is_rejected() {
        let mut config = StockConfig::default();
        config.general.date_format = "%d.%Q".into();
        assert!(config.validate().is_err());
    }
}
