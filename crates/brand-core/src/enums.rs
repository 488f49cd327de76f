//! Closed enumerations for every categorical input axis.
//!
//! Category, price point, and budget level arrive from the shell as raw
//! strings. Each enum offers `parse()` which returns `None` for anything
//! outside the closed set; callers resolve that miss with a documented
//! fallback rather than an error.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Industry category of the business.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FoodBeverage,
    PersonalCare,
    Household,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::FoodBeverage, Self::PersonalCare, Self::Household];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FoodBeverage => "food_beverage",
            Self::PersonalCare => "personal_care",
            Self::Household => "household",
        }
    }

    /// Exact-match parse. Unknown input is a lookup miss, not an error.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PricePoint
// ---------------------------------------------------------------------------

/// Price tier of the product line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum PricePoint {
    #[serde(rename = "budget")]
    Budget,
    #[serde(rename = "mid-range")]
    MidRange,
    #[serde(rename = "premium")]
    Premium,
}

impl PricePoint {
    pub const ALL: [Self; 3] = [Self::Budget, Self::MidRange, Self::Premium];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::MidRange => "mid-range",
            Self::Premium => "premium",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for PricePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BudgetLevel
// ---------------------------------------------------------------------------

/// Marketing budget. Drives channel count and campaign duration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BudgetLevel {
    Low,
    Medium,
    High,
}

impl BudgetLevel {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == value)
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Archetype
// ---------------------------------------------------------------------------

/// Brand personality archetype.
///
/// Variant order is the alphabetical order of the serialized names, so an
/// ordered set of archetypes renders alphabetically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Competent,
    Exciting,
    Rugged,
    Sincere,
    Sophisticated,
}

impl Archetype {
    pub const ALL: [Self; 5] = [
        Self::Competent,
        Self::Exciting,
        Self::Rugged,
        Self::Sincere,
        Self::Sophisticated,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Competent => "competent",
            Self::Exciting => "exciting",
            Self::Rugged => "rugged",
            Self::Sincere => "sincere",
            Self::Sophisticated => "sophisticated",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == value)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
