//! Shared client and configuration for all views.

use api::{ApiClient, ConfigError};
use dioxus::prelude::*;
use records::AppConfig;

/// Provided once at the app root; every list view reads it.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub client: ApiClient,
}

impl AppContext {
    /// Build the client for the configured endpoint.
    pub fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        let client = ApiClient::from_config(&config)?;
        Ok(Self { config, client })
    }
}

/// The client is derived from the config, so comparing configs is enough.
impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_base_url_fails_early() {
        assert!(AppContext::from_config(AppConfig::new("nowhere")).is_err());
        let ctx = AppContext::from_config(AppConfig::default()).unwrap();
        assert_eq!(ctx.client.base_url().as_str(), "http://localhost:3000/");
    }
}
