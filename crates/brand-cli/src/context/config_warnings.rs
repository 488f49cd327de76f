use brand_config::BrandConfig;
use brand_core::enums::{BudgetLevel, Category, PricePoint};

/// Env vars read directly rather than through figment.
const DIRECT_ENV_KEYS: [&str; 1] = ["BRANDKIT_LOG"];

/// Emit warnings for config that silently falls back to defaults.
pub fn warn_suspicious_config(config: &BrandConfig) {
    for warning in collect_config_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_config_warnings<I>(config: &BrandConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with("BRANDKIT_"))
        .filter(|key| !key.contains("__") && !DIRECT_ENV_KEYS.contains(&key.as_str()))
        .map(|key| {
            format!(
                "{key} is not a nested config key and is ignored. Use double underscores (example: BRANDKIT_STORE__PATH)."
            )
        })
        .collect::<Vec<_>>();

    let general = &config.general;
    if Category::parse(&general.default_category).is_none() {
        warnings.push(format!(
            "general.default_category '{}' is not a known category; generated strategies will use fallbacks.",
            general.default_category
        ));
    }
    if PricePoint::parse(&general.default_price_point).is_none() {
        warnings.push(format!(
            "general.default_price_point '{}' is not a known price point; positioning will use the fallback.",
            general.default_price_point
        ));
    }
    if BudgetLevel::parse(&general.default_budget_level).is_none() {
        warnings.push(format!(
            "general.default_budget_level '{}' is not a known budget level; the medium plan will be used.",
            general.default_budget_level
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use brand_config::BrandConfig;

    use super::collect_config_warnings;

    #[test]
    fn warns_for_flat_env_keys() {
        let warnings = collect_config_warnings(
            &BrandConfig::default(),
            vec![
                ("BRANDKIT_STORE_PATH".to_string(), "x.csv".to_string()),
                ("BRANDKIT_STORE__PATH".to_string(), "y.csv".to_string()),
                ("BRANDKIT_LOG".to_string(), "debug".to_string()),
                ("HOME".to_string(), "/root".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("BRANDKIT_STORE_PATH"));
    }

    #[test]
    fn warns_for_unknown_default_choices() {
        let mut config = BrandConfig::default();
        config.general.default_category = "electronics".to_string();
        config.general.default_budget_level = "huge".to_string();

        let warnings = collect_config_warnings(&config, Vec::new());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("electronics"));
        assert!(warnings[1].contains("huge"));
    }

    #[test]
    fn default_config_has_no_warnings() {
        assert!(collect_config_warnings(&BrandConfig::default(), Vec::new()).is_empty());
    }
}
