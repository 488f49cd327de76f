//! CLI response types returned by `brandkit` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::StrategyRecord;
use crate::enums::{BudgetLevel, Category, PricePoint};
use crate::tables::ReferenceTables;

/// Response from `brandkit options`: every choice the shell offers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OptionsResponse {
    pub categories: Vec<String>,
    pub price_points: Vec<String>,
    pub budget_levels: Vec<String>,
    /// Age groups followed by lifestyles.
    pub target_markets: Vec<String>,
}

impl OptionsResponse {
    #[must_use]
    pub fn from_tables(tables: &ReferenceTables) -> Self {
        Self {
            categories: Category::ALL.iter().map(ToString::to_string).collect(),
            price_points: PricePoint::ALL.iter().map(ToString::to_string).collect(),
            budget_levels: BudgetLevel::ALL.iter().map(ToString::to_string).collect(),
            target_markets: tables.demographics.target_market_options(),
        }
    }
}

/// Response from `brandkit history`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryResponse {
    pub store: String,
    pub total_rows: usize,
    pub strategies: Vec<StrategyRecord>,
}
