use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{BrandFramework, CampaignOutline, NameAssessment, PersonalityRecommendation};

/// Raw inputs collected by the shell.
///
/// Categorical fields are plain strings: values outside the closed
/// enumerations are accepted and resolved by table fallbacks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StrategyRequest {
    pub name: String,
    pub category: String,
    pub price_point: String,
    pub budget_level: String,
    pub target_market: Vec<String>,
}

/// Everything one generate request produces.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BrandStrategy {
    pub name: String,
    pub name_analysis: NameAssessment,
    pub framework: BrandFramework,
    pub personality: PersonalityRecommendation,
    pub campaign: CampaignOutline,
}
