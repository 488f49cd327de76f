//! JSON Schema export for the `brandkit schema` command.

use schemars::schema_for;

use crate::entities::{
    BrandFramework, BrandStrategy, CampaignOutline, NameAssessment, PersonalityRecommendation,
    StrategyRecord,
};
use crate::errors::CoreError;

/// Type names accepted by [`schema_json`].
pub const SCHEMA_TYPES: [&str; 6] = [
    "strategy",
    "record",
    "framework",
    "personality",
    "campaign",
    "name-analysis",
];

/// Generate the JSON Schema for a named entity type.
///
/// # Errors
///
/// Returns [`CoreError::UnknownSchema`] for a name outside [`SCHEMA_TYPES`].
pub fn schema_json(type_name: &str) -> Result<serde_json::Value, CoreError> {
    let schema = match type_name {
        "strategy" => schema_for!(BrandStrategy),
        "record" => schema_for!(StrategyRecord),
        "framework" => schema_for!(BrandFramework),
        "personality" => schema_for!(PersonalityRecommendation),
        "campaign" => schema_for!(CampaignOutline),
        "name-analysis" => schema_for!(NameAssessment),
        other => return Err(CoreError::UnknownSchema(other.to_string())),
    };

    Ok(schema.to_value())
}
