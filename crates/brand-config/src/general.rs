//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default number of rows shown by `brandkit history`.
const fn default_history_limit() -> u32 {
    20
}

fn default_category() -> String {
    "food_beverage".to_string()
}

fn default_price_point() -> String {
    "mid-range".to_string()
}

fn default_budget_level() -> String {
    "medium".to_string()
}

/// Defaults for inputs the user does not supply.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Category preselected by `brandkit generate`.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Price point preselected by `brandkit generate`.
    #[serde(default = "default_price_point")]
    pub default_price_point: String,

    /// Budget level preselected by `brandkit generate`.
    #[serde(default = "default_budget_level")]
    pub default_budget_level: String,

    /// Default row limit for `brandkit history`.
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            default_price_point: default_price_point(),
            default_budget_level: default_budget_level(),
            history_limit: default_history_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_category, "food_beverage");
        assert_eq!(config.default_price_point, "mid-range");
        assert_eq!(config.default_budget_level, "medium");
        assert_eq!(config.history_limit, 20);
    }
}
