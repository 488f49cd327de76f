use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AudienceProfile;

/// Category, audience, positioning, and keywords for one generate request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BrandFramework {
    /// The category exactly as supplied, recognised or not.
    pub category: String,
    pub target_audience: AudienceProfile,
    pub positioning: String,
    pub keywords: Vec<String>,
}
