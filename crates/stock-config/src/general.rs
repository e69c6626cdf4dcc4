//! General presentation settings.

use serde::{Deserialize, Serialize};
use stock_core::time::DEFAULT_DATE_FORMAT;

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// chrono format string for item dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.date_format, "%d.%m.%Y");
    }
}
