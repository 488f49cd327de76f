//! Rule-based strategy generator.
//!
//! Every method is a pure function of its arguments and the borrowed
//! [`ReferenceTables`]. Inputs outside the closed enumerations never fail;
//! they resolve to the fallback documented on the table accessor.

use std::collections::BTreeSet;

use crate::entities::{
    AudienceProfile, BrandFramework, BrandStrategy, CampaignOutline, NameAssessment,
    PersonalityRecommendation, StrategyRequest,
};
use crate::enums::{BudgetLevel, Category, PricePoint};
use crate::tables::{ReferenceTables, Trigger};

/// Names at or below this many characters count as memorable.
pub const MEMORABLE_NAME_MAX_LEN: usize = 12;

/// Advice attached to a name longer than [`MEMORABLE_NAME_MAX_LEN`].
pub const SHORTEN_NAME_SUGGESTION: &str = "Consider shortening the name for better recall";

/// Generates brand strategies from a set of reference tables.
#[derive(Debug, Clone, Copy)]
pub struct StrategyGenerator<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> StrategyGenerator<'a> {
    #[must_use]
    pub const fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    #[must_use]
    pub const fn tables(&self) -> &'a ReferenceTables {
        self.tables
    }

    /// Assess length and memorability of a business name.
    #[must_use]
    pub fn analyze_name(&self, name: &str) -> NameAssessment {
        let length = name.chars().count();
        let memorable = length <= MEMORABLE_NAME_MAX_LEN;
        let suggestions = if memorable {
            Vec::new()
        } else {
            vec![SHORTEN_NAME_SUGGESTION.to_string()]
        };

        NameAssessment {
            length,
            memorable,
            suggestions,
        }
    }

    /// Split tags into age groups and lifestyle indicators.
    ///
    /// Age groups are checked first. A tag that is neither is dropped.
    #[must_use]
    pub fn classify_audience<S: AsRef<str>>(&self, tags: &[S]) -> AudienceProfile {
        let demographics = &self.tables.demographics;
        let mut profile = AudienceProfile::default();

        for tag in tags.iter().map(|t| t.as_ref()) {
            if demographics.is_age_group(tag) {
                profile.primary_demographic.insert(tag.to_string());
            } else if demographics.is_lifestyle(tag) {
                profile.lifestyle_indicators.insert(tag.to_string());
            }
        }

        profile
    }

    /// Positioning statement for an exact `(category, price point)` match.
    #[must_use]
    pub fn positioning_for(&self, category: &str, price_point: &str) -> String {
        self.tables
            .positioning_for(Category::parse(category), PricePoint::parse(price_point))
            .to_string()
    }

    /// Industry keywords for a category; empty when unknown.
    #[must_use]
    pub fn keywords_for(&self, category: &str) -> Vec<String> {
        self.tables.keywords_for(Category::parse(category)).to_vec()
    }

    #[must_use]
    pub fn build_framework<S: AsRef<str>>(
        &self,
        category: &str,
        tags: &[S],
        price_point: &str,
    ) -> BrandFramework {
        BrandFramework {
            category: category.to_string(),
            target_audience: self.classify_audience(tags),
            positioning: self.positioning_for(category, price_point),
            keywords: self.keywords_for(category),
        }
    }

    /// Apply every personality rule whose trigger fires and merge the results.
    #[must_use]
    pub fn recommend_personality<S: AsRef<str>>(
        &self,
        tags: &[S],
        price_point: &str,
    ) -> PersonalityRecommendation {
        let price_point = PricePoint::parse(price_point);
        let selected: BTreeSet<&str> = tags.iter().map(|t| t.as_ref()).collect();

        let recommended_personalities: BTreeSet<_> = self
            .tables
            .personality_rules
            .iter()
            .filter(|rule| match &rule.trigger {
                Trigger::Tag { tag } => selected.contains(tag.as_str()),
                Trigger::PricePoint { price_point: tier } => price_point == Some(*tier),
            })
            .flat_map(|rule| rule.archetypes.iter().copied())
            .collect();

        let suggested_traits = recommended_personalities
            .iter()
            .flat_map(|archetype| self.tables.traits_for(*archetype).iter().cloned())
            .collect();

        PersonalityRecommendation {
            recommended_personalities,
            suggested_traits,
        }
    }

    #[must_use]
    pub fn build_campaign(&self, framework: &BrandFramework, budget_level: &str) -> CampaignOutline {
        let budget_level = BudgetLevel::parse(budget_level);
        let category = Category::parse(&framework.category);

        CampaignOutline {
            recommended_channels: self.tables.channels_for(budget_level).to_vec(),
            content_themes: self.tables.themes_for(category).to_vec(),
            campaign_duration: self.tables.duration_for(budget_level).to_string(),
            key_messages: key_messages(framework),
            success_metrics: self.tables.success_metrics.clone(),
        }
    }

    /// Run the whole pipeline for one request.
    #[must_use]
    pub fn generate_strategy(&self, request: &StrategyRequest) -> BrandStrategy {
        let framework = self.build_framework(
            &request.category,
            request.target_market.as_slice(),
            &request.price_point,
        );
        let personality =
            self.recommend_personality(request.target_market.as_slice(), &request.price_point);
        let campaign = self.build_campaign(&framework, &request.budget_level);

        BrandStrategy {
            name: request.name.clone(),
            name_analysis: self.analyze_name(&request.name),
            framework,
            personality,
            campaign,
        }
    }
}

/// Fill the three fixed message templates.
///
/// A missing keyword is replaced by the empty string; the surrounding
/// template text is left as is.
fn key_messages(framework: &BrandFramework) -> Vec<String> {
    let keyword = |index: usize| framework.keywords.get(index).map_or("", String::as_str);

    vec![
        format!("Quality {} products for your lifestyle", keyword(0)),
        format!("Your trusted partner for {}", framework.positioning.to_lowercase()),
        format!("Experience the difference with our {} solutions", keyword(1)),
    ]
}
