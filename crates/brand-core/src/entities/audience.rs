use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Target-market tags split into age groups and lifestyle indicators.
///
/// A tag lands in at most one of the two sets. Tags recognised as neither
/// are not represented.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AudienceProfile {
    pub primary_demographic: BTreeSet<String>,
    pub lifestyle_indicators: BTreeSet<String>,
}
