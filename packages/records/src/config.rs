//! # Application configuration — `recordbook.toml`
//!
//! The web package embeds this file at build time; native builds may also
//! override values from the environment (see `api::config`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"   # REST endpoint root
//!
//! [search]
//! mode = "any_name"                    # or "last_field_only"
//!
//! [notifications]
//! dismiss_after_secs = 5               # 0 keeps toasts until closed
//! ```
//!
//! All sections derive `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Root URL the resource paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// How the search box text is turned into list filters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Match the text against any search field, merging results.
    #[default]
    AnyName,
    /// Filter on the last search field only.
    LastFieldOnly,
}

impl SearchMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "any_name" => Some(SearchMode::AnyName),
            "last_field_only" => Some(SearchMode::LastFieldOnly),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub mode: SearchMode,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Seconds before a toast disappears. 0 disables auto-dismiss.
    #[serde(default = "default_dismiss_after")]
    pub dismiss_after_secs: u32,
}

fn default_dismiss_after() -> u32 {
    5
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            dismiss_after_secs: default_dismiss_after(),
        }
    }
}

impl AppConfig {
    /// Create a config pointing at the given endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiSettings {
                base_url: base_url.into(),
            },
            ..Self::default()
        }
    }

    /// Builder method to set the search mode.
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search.mode = mode;
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.search.mode, SearchMode::AnyName);
        assert_eq!(config.notifications.dismiss_after_secs, 5);
    }

    #[test]
    fn test_partial_file() {
        let config = AppConfig::from_toml(
            r#"
            [search]
            mode = "last_field_only"
            "#,
        )
        .unwrap();
        assert_eq!(config.search.mode, SearchMode::LastFieldOnly);
        assert_eq!(config.api, ApiSettings::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::new("https://records.example/api/v1")
            .with_search_mode(SearchMode::LastFieldOnly);
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        assert!(AppConfig::from_toml("[search]\nmode = \"fuzzy\"").is_err());
        assert_eq!(SearchMode::parse("fuzzy"), None);
        assert_eq!(SearchMode::parse("any_name"), Some(SearchMode::AnyName));
    }
}
