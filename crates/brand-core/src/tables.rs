//! Reference tables consulted by the strategy generator.
//!
//! A `ReferenceTables` value is built once at startup and handed to the
//! generator by reference. It is never mutated afterwards. Every key domain
//! is one of the closed enums in [`crate::enums`]; lookups that miss fall back
//! to the defaults documented on each accessor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::{Archetype, BudgetLevel, Category, PricePoint};

/// Positioning phrase used when no `(category, price point)` entry matches.
pub const FALLBACK_POSITIONING: &str = "Quality products for daily needs";

/// Campaign duration used for an unknown budget level.
pub const FALLBACK_DURATION: &str = "6 months";

/// Budget level whose channel list is used for an unknown budget level.
pub const FALLBACK_BUDGET_LEVEL: BudgetLevel = BudgetLevel::Medium;

/// Demographic taxonomy offered to the user as target-market tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub age_groups: Vec<String>,
    pub income_levels: Vec<String>,
    pub lifestyles: Vec<String>,
}

impl Demographics {
    #[must_use]
    pub fn is_age_group(&self, tag: &str) -> bool {
        self.age_groups.iter().any(|g| g == tag)
    }

    #[must_use]
    pub fn is_lifestyle(&self, tag: &str) -> bool {
        self.lifestyles.iter().any(|l| l == tag)
    }

    /// Every selectable target-market tag: age groups first, then lifestyles.
    #[must_use]
    pub fn target_market_options(&self) -> Vec<String> {
        self.age_groups
            .iter()
            .chain(self.lifestyles.iter())
            .cloned()
            .collect()
    }
}

/// One row of the positioning table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositioningEntry {
    pub category: Category,
    pub price_point: PricePoint,
    pub statement: String,
}

/// Condition under which a personality rule fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trigger {
    /// A target-market tag is present in the selection.
    Tag { tag: String },
    /// The price point equals the given tier.
    PricePoint { price_point: PricePoint },
}

/// Archetypes added when `trigger` fires. Rules are independent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityRule {
    pub trigger: Trigger,
    pub archetypes: Vec<Archetype>,
}

/// All static lookup data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub industry_keywords: BTreeMap<Category, Vec<String>>,
    pub archetype_traits: BTreeMap<Archetype, Vec<String>>,
    pub demographics: Demographics,
    pub positioning: Vec<PositioningEntry>,
    pub fallback_positioning: String,
    pub channels: BTreeMap<BudgetLevel, Vec<String>>,
    pub content_themes: BTreeMap<Category, Vec<String>>,
    pub durations: BTreeMap<BudgetLevel, String>,
    pub personality_rules: Vec<PersonalityRule>,
    pub success_metrics: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn tag_rule(tag: &str, archetypes: &[Archetype]) -> PersonalityRule {
    PersonalityRule {
        trigger: Trigger::Tag {
            tag: tag.to_string(),
        },
        archetypes: archetypes.to_vec(),
    }
}

fn price_rule(price_point: PricePoint, archetypes: &[Archetype]) -> PersonalityRule {
    PersonalityRule {
        trigger: Trigger::PricePoint { price_point },
        archetypes: archetypes.to_vec(),
    }
}

impl ReferenceTables {
    /// The built-in tables shipped with Brandkit.
    #[must_use]
    pub fn builtin() -> Self {
        use Archetype::{Competent, Exciting, Rugged, Sincere, Sophisticated};

        let industry_keywords = BTreeMap::from([
            (
                Category::FoodBeverage,
                strings(&["nutrition", "taste", "convenience", "freshness", "quality"]),
            ),
            (
                Category::PersonalCare,
                strings(&["hygiene", "beauty", "wellness", "self-care", "natural"]),
            ),
            (
                Category::Household,
                strings(&["clean", "efficient", "safe", "convenient", "effective"]),
            ),
        ]);

        let archetype_traits = BTreeMap::from([
            (
                Sincere,
                strings(&["honest", "wholesome", "authentic", "friendly"]),
            ),
            (
                Exciting,
                strings(&["daring", "spirited", "imaginative", "innovative"]),
            ),
            (
                Competent,
                strings(&["reliable", "intelligent", "successful", "professional"]),
            ),
            (
                Sophisticated,
                strings(&["elegant", "prestigious", "refined", "premium"]),
            ),
            (Rugged, strings(&["outdoorsy", "tough", "strong", "resilient"])),
        ]);

        let demographics = Demographics {
            age_groups: strings(&["18-24", "25-34", "35-44", "45-54", "55+"]),
            income_levels: strings(&["budget", "mid-range", "premium"]),
            lifestyles: strings(&[
                "health-conscious",
                "busy professionals",
                "families",
                "eco-friendly",
            ]),
        };

        let positioning = [
            (
                Category::FoodBeverage,
                PricePoint::Premium,
                "Premium quality, artisanal products",
            ),
            (
                Category::FoodBeverage,
                PricePoint::MidRange,
                "Quality products at reasonable prices",
            ),
            (
                Category::FoodBeverage,
                PricePoint::Budget,
                "Affordable everyday essentials",
            ),
            (
                Category::PersonalCare,
                PricePoint::Premium,
                "Luxury self-care and wellness",
            ),
            (
                Category::PersonalCare,
                PricePoint::MidRange,
                "Effective, reliable personal care",
            ),
            (
                Category::PersonalCare,
                PricePoint::Budget,
                "Essential personal care solutions",
            ),
        ]
        .into_iter()
        .map(|(category, price_point, statement)| PositioningEntry {
            category,
            price_point,
            statement: statement.to_string(),
        })
        .collect();

        let channels = BTreeMap::from([
            (
                BudgetLevel::Low,
                strings(&["social media", "email marketing", "local partnerships"]),
            ),
            (
                BudgetLevel::Medium,
                strings(&[
                    "social media",
                    "email marketing",
                    "content marketing",
                    "influencer partnerships",
                    "local events",
                ]),
            ),
            (
                BudgetLevel::High,
                strings(&[
                    "social media",
                    "email marketing",
                    "content marketing",
                    "influencer partnerships",
                    "paid advertising",
                    "PR campaigns",
                    "events",
                ]),
            ),
        ]);

        let content_themes = BTreeMap::from([
            (
                Category::FoodBeverage,
                strings(&[
                    "Recipe ideas",
                    "Nutrition tips",
                    "Lifestyle content",
                    "Product usage ideas",
                ]),
            ),
            (
                Category::PersonalCare,
                strings(&[
                    "Beauty tips",
                    "Self-care routines",
                    "Wellness advice",
                    "Product tutorials",
                ]),
            ),
            (
                Category::Household,
                strings(&[
                    "Cleaning tips",
                    "Home organization",
                    "Sustainable living",
                    "Product hacks",
                ]),
            ),
        ]);

        let durations = BTreeMap::from([
            (BudgetLevel::Low, "3 months".to_string()),
            (BudgetLevel::Medium, "6 months".to_string()),
            (BudgetLevel::High, "12 months".to_string()),
        ]);

        let personality_rules = vec![
            tag_rule("health-conscious", &[Sincere, Competent]),
            tag_rule("busy professionals", &[Competent, Sophisticated]),
            tag_rule("families", &[Sincere, Exciting]),
            price_rule(PricePoint::Premium, &[Sophisticated]),
            price_rule(PricePoint::Budget, &[Sincere, Rugged]),
        ];

        let success_metrics = strings(&[
            "Sales growth percentage",
            "Social media engagement rates",
            "Customer acquisition cost",
            "Brand awareness metrics",
            "Customer feedback and reviews",
            "Website traffic and conversion rates",
        ]);

        Self {
            industry_keywords,
            archetype_traits,
            demographics,
            positioning,
            fallback_positioning: FALLBACK_POSITIONING.to_string(),
            channels,
            content_themes,
            durations,
            personality_rules,
            success_metrics,
        }
    }

    /// Keywords for a category. Empty for an unknown category.
    #[must_use]
    pub fn keywords_for(&self, category: Option<Category>) -> &[String] {
        category
            .and_then(|c| self.industry_keywords.get(&c))
            .map_or(&[][..], Vec::as_slice)
    }

    /// Traits for an archetype. Empty if the table has no entry.
    #[must_use]
    pub fn traits_for(&self, archetype: Archetype) -> &[String] {
        self.archetype_traits
            .get(&archetype)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Positioning statement for an exact `(category, price point)` pair,
    /// else [`Self::fallback_positioning`].
    #[must_use]
    pub fn positioning_for(&self, category: Option<Category>, price_point: Option<PricePoint>) -> &str {
        let (Some(category), Some(price_point)) = (category, price_point) else {
            return &self.fallback_positioning;
        };

        self.positioning
            .iter()
            .find(|e| e.category == category && e.price_point == price_point)
            .map_or(self.fallback_positioning.as_str(), |e| e.statement.as_str())
    }

    /// Channel list for a budget level. Unknown levels use the medium list.
    #[must_use]
    pub fn channels_for(&self, budget_level: Option<BudgetLevel>) -> &[String] {
        let level = budget_level.unwrap_or(FALLBACK_BUDGET_LEVEL);
        self.channels
            .get(&level)
            .or_else(|| self.channels.get(&FALLBACK_BUDGET_LEVEL))
            .map_or(&[][..], Vec::as_slice)
    }

    /// Content themes for a category. Empty for an unknown category.
    #[must_use]
    pub fn themes_for(&self, category: Option<Category>) -> &[String] {
        category
            .and_then(|c| self.content_themes.get(&c))
            .map_or(&[][..], Vec::as_slice)
    }

    /// Campaign duration label. Unknown levels give [`FALLBACK_DURATION`].
    #[must_use]
    pub fn duration_for(&self, budget_level: Option<BudgetLevel>) -> &str {
        budget_level
            .and_then(|b| self.durations.get(&b))
            .map_or(FALLBACK_DURATION, String::as_str)
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::builtin()
    }
}
