use brand_config::GeneralConfig;
use brand_core::ReferenceTables;
use brand_core::entities::{BrandStrategy, StrategyRequest};
use brand_core::enums::{BudgetLevel, Category, PricePoint};
use brand_core::errors::CoreError;
use brand_store::ExportReceipt;
use serde::Serialize;

use crate::cli::root_commands::GenerateArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;
use crate::output::report::strategy_report;

#[derive(Debug, Serialize)]
struct GenerateResponse {
    strategy: BrandStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved: Option<ExportReceipt>,
}

/// Handle `brandkit generate`.
pub fn handle(args: &GenerateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    CoreError::check_required(&args.name, &args.targets)?;

    let request = build_request(args, &ctx.config.general);
    for warning in unknown_inputs(&request, &ctx.tables) {
        tracing::warn!("{warning}");
    }

    let strategy = ctx.generator().generate_strategy(&request);
    let export = if args.save {
        Some(ctx.store.export_strategy(
            &strategy.name,
            &strategy.framework,
            &strategy.personality,
            &strategy.campaign,
        ))
    } else {
        None
    };
    let (saved, export_error) = match export {
        Some(Ok(receipt)) => (Some(receipt), None),
        Some(Err(error)) => (None, Some(error)),
        None => (None, None),
    };

    // The strategy is shown even when saving it failed.
    if flags.format == OutputFormat::Text {
        println!("{}", strategy_report(&strategy));
        if let Some(receipt) = &saved {
            println!();
            println!("Strategy saved to {}", receipt.path);
        }
    } else {
        output(&GenerateResponse { strategy, saved }, flags.format)?;
    }

    match export_error {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Fill omitted choices from the configured defaults.
fn build_request(args: &GenerateArgs, defaults: &GeneralConfig) -> StrategyRequest {
    StrategyRequest {
        name: args.name.clone(),
        category: args
            .category
            .clone()
            .unwrap_or_else(|| defaults.default_category.clone()),
        price_point: args
            .price_point
            .clone()
            .unwrap_or_else(|| defaults.default_price_point.clone()),
        budget_level: args
            .budget
            .clone()
            .unwrap_or_else(|| defaults.default_budget_level.clone()),
        target_market: args.targets.clone(),
    }
}

/// Inputs outside the offered choices. They are accepted and fall back.
fn unknown_inputs(request: &StrategyRequest, tables: &ReferenceTables) -> Vec<String> {
    let mut warnings = Vec::new();

    if Category::parse(&request.category).is_none() {
        warnings.push(format!(
            "unknown category '{}'; positioning, keywords and themes use fallbacks",
            request.category
        ));
    }
    if PricePoint::parse(&request.price_point).is_none() {
        warnings.push(format!(
            "unknown price point '{}'; positioning uses the fallback",
            request.price_point
        ));
    }
    if BudgetLevel::parse(&request.budget_level).is_none() {
        warnings.push(format!(
            "unknown budget level '{}'; using the medium campaign plan",
            request.budget_level
        ));
    }

    let demographics = &tables.demographics;
    warnings.extend(
        request
            .target_market
            .iter()
            .filter(|tag| !demographics.is_age_group(tag) && !demographics.is_lifestyle(tag))
            .map(|tag| format!("target market '{tag}' is not a known age group or lifestyle; ignored")),
    );

    warnings
}

#[cfg(test)]
mod tests {
    use brand_config::GeneralConfig;
    use brand_core::ReferenceTables;

    use super::{build_request, unknown_inputs};
    use crate::cli::root_commands::GenerateArgs;

    fn args(category: Option<&str>, targets: &[&str]) -> GenerateArgs {
        GenerateArgs {
            name: "Harvest".to_string(),
            category: category.map(str::to_string),
            price_point: None,
            budget: Some("high".to_string()),
            targets: targets.iter().map(|t| (*t).to_string()).collect(),
            save: false,
        }
    }

    #[test]
    fn omitted_choices_use_configured_defaults() {
        let request = build_request(&args(None, &["families"]), &GeneralConfig::default());
        assert_eq!(request.category, "food_beverage");
        assert_eq!(request.price_point, "mid-range");
        assert_eq!(request.budget_level, "high");
        assert_eq!(request.target_market, vec!["families".to_string()]);
    }

    #[test]
    fn explicit_choices_win_over_defaults() {
        let request = build_request(
            &args(Some("household"), &["18-24"]),
            &GeneralConfig::default(),
        );
        assert_eq!(request.category, "household");
    }

    #[test]
    fn known_inputs_produce_no_warnings() {
        let tables = ReferenceTables::builtin();
        let request = build_request(
            &args(Some("personal_care"), &["18-24", "eco-friendly"]),
            &GeneralConfig::default(),
        );
        assert!(unknown_inputs(&request, &tables).is_empty());
    }

    #[test]
    fn unknown_tags_and_category_are_reported() {
        let tables = ReferenceTables::builtin();
        let request = build_request(
            &args(Some("electronics"), &["martians", "families"]),
            &GeneralConfig::default(),
        );
        let warnings = unknown_inputs(&request, &tables);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("electronics"));
        assert!(warnings[1].contains("martians"));
    }
}
