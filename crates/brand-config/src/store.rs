//! Strategy store configuration.

use serde::{Deserialize, Serialize};

/// Store location used when nothing overrides it, relative to the working
/// directory.
pub const DEFAULT_STORE_PATH: &str = "brand_strategies/brand_strategy_data.csv";

fn default_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path of the CSV file saved strategies are appended to.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
