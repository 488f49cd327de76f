use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Marketing campaign outline derived from a framework and a budget level.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CampaignOutline {
    pub recommended_channels: Vec<String>,
    pub content_themes: Vec<String>,
    pub campaign_duration: String,
    /// Always exactly three messages.
    pub key_messages: Vec<String>,
    pub success_metrics: Vec<String>,
}
