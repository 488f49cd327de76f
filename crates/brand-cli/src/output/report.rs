//! Plain-text report layout for a generated strategy.

use std::fmt::Write;

use brand_core::entities::BrandStrategy;

const RULE_WIDTH: usize = 50;

fn list(items: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    items
        .into_iter()
        .map(|item| item.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

const fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Render the strategy as a sectioned report.
#[must_use]
pub fn strategy_report(strategy: &BrandStrategy) -> String {
    let name = &strategy.name_analysis;
    let framework = &strategy.framework;
    let personality = &strategy.personality;
    let campaign = &strategy.campaign;

    let mut out = String::new();
    let _ = writeln!(out, "Brand Strategy Analysis: {}", strategy.name);
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out);

    let _ = writeln!(out, "Business Name Analysis:");
    let _ = writeln!(out, "- Length: {}", name.length);
    let _ = writeln!(out, "- Memorable: {}", yes_no(name.memorable));
    for suggestion in &name.suggestions {
        let _ = writeln!(out, "- Suggestion: {suggestion}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Brand Framework:");
    let _ = writeln!(out, "- Category: {}", framework.category);
    let _ = writeln!(
        out,
        "- Target Audience: {}",
        list(&framework.target_audience.primary_demographic)
    );
    let _ = writeln!(
        out,
        "- Lifestyle: {}",
        list(&framework.target_audience.lifestyle_indicators)
    );
    let _ = writeln!(out, "- Positioning: {}", framework.positioning);
    let _ = writeln!(out, "- Keywords: {}", list(&framework.keywords));
    let _ = writeln!(out);

    let _ = writeln!(out, "Brand Personality:");
    let _ = writeln!(
        out,
        "- Recommended: {}",
        list(personality.recommended_personalities.iter().map(|a| a.as_str()))
    );
    let _ = writeln!(out, "- Traits: {}", list(&personality.suggested_traits));
    let _ = writeln!(out);

    let _ = writeln!(out, "Marketing Campaign:");
    let _ = writeln!(out, "- Channels: {}", list(&campaign.recommended_channels));
    let _ = writeln!(out, "- Duration: {}", campaign.campaign_duration);
    let _ = writeln!(out, "- Content Themes: {}", list(&campaign.content_themes));
    let _ = writeln!(out, "- Key Messages:");
    for message in &campaign.key_messages {
        let _ = writeln!(out, "  * {message}");
    }
    let _ = writeln!(out, "- Success Metrics:");
    for metric in &campaign.success_metrics {
        let _ = writeln!(out, "  * {metric}");
    }

    out.trim_end().to_string()
}
