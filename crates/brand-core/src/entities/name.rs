use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Quality assessment of a business name.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NameAssessment {
    /// Length in characters.
    pub length: usize,
    /// True iff `length` is at most the memorability threshold.
    pub memorable: bool,
    pub suggestions: Vec<String>,
}
