use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::enums::Archetype;

/// Archetypes whose triggers fired, plus the union of their traits.
///
/// Both sets are empty when no trigger fires.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PersonalityRecommendation {
    pub recommended_personalities: BTreeSet<Archetype>,
    pub suggested_traits: BTreeSet<String>,
}
