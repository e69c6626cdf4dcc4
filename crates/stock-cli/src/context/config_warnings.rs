use stock_config::StockConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &StockConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &StockConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.store.path.is_empty() && has_single_underscore_key(&env_keys, "STOCK_STORE") {
        warnings.push(
            "Store config appears default while STOCK_STORE_* env vars exist. Use double underscores (example: STOCK_STORE__PATH)."
                .to_string(),
        );
    }

    if config.logging.file.is_empty() && has_single_underscore_key(&env_keys, "STOCK_LOGGING") {
        warnings.push(
            "Logging config appears default while STOCK_LOGGING_* env vars exist. Use double underscores (example: STOCK_LOGGING__FILE)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let single = format!("{section}_");
    let double = format!("{section}__");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&double))
}
