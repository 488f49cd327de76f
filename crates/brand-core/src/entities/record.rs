use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{BrandFramework, BrandStrategy, CampaignOutline, PersonalityRecommendation};

/// Separator for multi-valued fields in a flat record.
pub const LIST_SEPARATOR: &str = ", ";

/// Flat projection of a strategy, one row in the CSV store.
///
/// Field names serialize to the store's column headers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StrategyRecord {
    #[serde(rename = "Business Name")]
    pub business_name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Target Audience")]
    pub target_audience: String,
    #[serde(rename = "Positioning")]
    pub positioning: String,
    #[serde(rename = "Keywords")]
    pub keywords: String,
    #[serde(rename = "Recommended Personalities")]
    pub recommended_personalities: String,
    #[serde(rename = "Suggested Traits")]
    pub suggested_traits: String,
    #[serde(rename = "Marketing Channels")]
    pub marketing_channels: String,
    #[serde(rename = "Content Themes")]
    pub content_themes: String,
    #[serde(rename = "Key Messages")]
    pub key_messages: String,
    #[serde(rename = "Campaign Duration")]
    pub campaign_duration: String,
}

fn join<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

impl StrategyRecord {
    /// Column headers in store order.
    pub const HEADERS: [&'static str; 11] = [
        "Business Name",
        "Category",
        "Target Audience",
        "Positioning",
        "Keywords",
        "Recommended Personalities",
        "Suggested Traits",
        "Marketing Channels",
        "Content Themes",
        "Key Messages",
        "Campaign Duration",
    ];

    /// Flatten the generated parts into one record.
    ///
    /// Target Audience carries the primary demographic only; lifestyle
    /// indicators are not exported.
    #[must_use]
    pub fn from_parts(
        name: &str,
        framework: &BrandFramework,
        personality: &PersonalityRecommendation,
        campaign: &CampaignOutline,
    ) -> Self {
        Self {
            business_name: name.to_string(),
            category: framework.category.clone(),
            target_audience: join(&framework.target_audience.primary_demographic),
            positioning: framework.positioning.clone(),
            keywords: join(&framework.keywords),
            recommended_personalities: join(
                personality
                    .recommended_personalities
                    .iter()
                    .map(|a| a.as_str()),
            ),
            suggested_traits: join(&personality.suggested_traits),
            marketing_channels: join(&campaign.recommended_channels),
            content_themes: join(&campaign.content_themes),
            key_messages: join(&campaign.key_messages),
            campaign_duration: campaign.campaign_duration.clone(),
        }
    }
}

impl From<&BrandStrategy> for StrategyRecord {
    fn from(strategy: &BrandStrategy) -> Self {
        Self::from_parts(
            &strategy.name,
            &strategy.framework,
            &strategy.personality,
            &strategy.campaign,
        )
    }
}
