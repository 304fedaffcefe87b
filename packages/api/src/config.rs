//! Configuration loading.
//!
//! The web package embeds `recordbook.toml`; values from the environment take
//! precedence. On native targets that means the process environment (after
//! reading `.env` via `dotenvy`); in the browser there is no environment, so
//! the variables are captured at compile time instead.

use records::{AppConfig, SearchMode};

use crate::error::ConfigError;

/// Overrides `api.base_url`.
pub const BASE_URL_VAR: &str = "API_BASE_URL";
/// Overrides `search.mode` (`any_name` or `last_field_only`).
pub const SEARCH_MODE_VAR: &str = "RECORDBOOK_SEARCH_MODE";

/// Parse the embedded config and apply environment overrides.
pub fn load_config(embedded: &str) -> Result<AppConfig, ConfigError> {
    #[cfg(not(target_arch = "wasm32"))]
    dotenvy::dotenv().ok();

    let config = AppConfig::from_toml(embedded)?;
    apply_overrides(config, env_var)
}

/// Apply overrides looked up through `lookup`. Blank values are ignored.
pub fn apply_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = get(BASE_URL_VAR) {
        config.api.base_url = url.trim().to_string();
    }
    if let Some(mode) = get(SEARCH_MODE_VAR) {
        config.search.mode =
            SearchMode::parse(&mode).ok_or_else(|| ConfigError::SearchMode(mode.clone()))?;
    }
    Ok(config)
}

#[cfg(not(target_arch = "wasm32"))]
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn env_var(key: &str) -> Option<String> {
    let value = match key {
        BASE_URL_VAR => option_env!("API_BASE_URL"),
        SEARCH_MODE_VAR => option_env!("RECORDBOOK_SEARCH_MODE"),
        _ => None,
    };
    value.map(str::to_string)
}
