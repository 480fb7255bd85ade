//! Provider catalog and generation settings.
//!
//! This module provides:
//! - Provider catalog loaded from embedded JSON configuration
//! - `GenerationConfig`, the per-client settings seeded from the catalog
//! - API key lookup via the environment

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::env::AiEnvironment;
use crate::error::AiError;

// ============================================================================
// Provider Catalog (Static JSON)
// ============================================================================

/// Static provider catalog loaded from embedded JSON.
static PROVIDER_CATALOG: Lazy<ProviderCatalog> = Lazy::new(|| {
    let json = include_str!("ai_providers.json");
    serde_json::from_str(json).expect("Failed to parse ai_providers.json")
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderCatalog {
    providers: HashMap<String, ProviderCatalogEntry>,
    default_provider: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderCatalogEntry {
    name: String,
    description: String,
    env_key: String,
    base_url: String,
    default_model: String,
    #[serde(default)]
    thinking_budget: Option<u32>,
    #[serde(default)]
    documentation_url: Option<String>,
}

/// Provider info for display and diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub env_key: String,
    pub base_url: String,
    pub default_model: String,
    pub thinking_budget: Option<u32>,
    pub documentation_url: Option<String>,
}

impl ProviderInfo {
    fn from_entry(id: &str, entry: &ProviderCatalogEntry) -> Self {
        Self {
            id: id.to_string(),
            name: entry.name.clone(),
            description: entry.description.clone(),
            env_key: entry.env_key.clone(),
            base_url: entry.base_url.clone(),
            default_model: entry.default_model.clone(),
            thinking_budget: entry.thinking_budget,
            documentation_url: entry.documentation_url.clone(),
        }
    }
}

/// Look up a provider by id.
pub fn get_provider(provider_id: &str) -> Option<ProviderInfo> {
    PROVIDER_CATALOG
        .providers
        .get(provider_id)
        .map(|entry| ProviderInfo::from_entry(provider_id, entry))
}

/// The provider used when none is configured.
pub fn default_provider() -> Option<ProviderInfo> {
    get_provider(&PROVIDER_CATALOG.default_provider)
}

// ============================================================================
// Generation Config
// ============================================================================

/// Settings for one generation client.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Model identifier, e.g. `gemini-3-pro-preview`.
    pub model_id: String,
    /// Reasoning token budget; `None` omits the thinking config.
    pub thinking_budget: Option<u32>,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// API host passed to the provider client, without trailing slash.
    pub base_url: String,
    /// Request timeout. `None` waits as long as the provider does.
    pub timeout: Option<Duration>,
}

impl GenerationConfig {
    /// Build a config from a catalog entry.
    pub fn for_provider(provider_id: &str) -> Result<Self, AiError> {
        let provider = get_provider(provider_id)
            .ok_or_else(|| AiError::internal(format!("Unknown provider {}", provider_id)))?;
        Ok(Self::from_provider(&provider))
    }

    fn from_provider(provider: &ProviderInfo) -> Self {
        Self {
            model_id: provider.default_model.clone(),
            thinking_budget: provider.thinking_budget,
            api_key_env: provider.env_key.clone(),
            base_url: provider.base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve the API key through the environment.
    ///
    /// Called on every generation; an unset or blank value is `MissingApiKey`.
    pub fn get_api_key(&self, env: &dyn AiEnvironment) -> Result<String, AiError> {
        env.secret(&self.api_key_env)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| AiError::MissingApiKey(self.api_key_env.clone()))
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        match default_provider() {
            Some(provider) => Self::from_provider(&provider),
            None => Self {
                model_id: "gemini-3-pro-preview".to_string(),
                thinking_budget: Some(8000),
                api_key_env: "API_KEY".to_string(),
                base_url: "https://generativelanguage.googleapis.com".to_string(),
                timeout: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::test_env::MockEnvironment;

    #[test]
    fn test_catalog_parses_with_gemini_default() {
        let provider = default_provider().expect("default provider");
        assert_eq!(provider.id, "gemini");
        assert_eq!(provider.env_key, "API_KEY");
        assert_eq!(provider.default_model, "gemini-3-pro-preview");
        assert_eq!(provider.thinking_budget, Some(8000));
    }

    #[test]
    fn test_default_config_comes_from_catalog() {
        let config = GenerationConfig::default();
        assert_eq!(config.model_id, "gemini-3-pro-preview");
        assert_eq!(config.api_key_env, "API_KEY");
        assert!(!config.base_url.ends_with('/'));
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        assert!(GenerationConfig::for_provider("nope").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = GenerationConfig::default()
            .with_model("gemini-2.5-flash")
            .with_base_url("http://localhost:8080/v1beta/");
        assert_eq!(config.model_id, "gemini-2.5-flash");
        assert_eq!(config.base_url, "http://localhost:8080/v1beta");
    }

    #[test]
    fn test_api_key_lookup() {
        let config = GenerationConfig::default();

        let env = MockEnvironment::default();
        let err = config.get_api_key(&env).unwrap_err();
        assert_eq!(err.code(), "MISSING_API_KEY");

        env.set_secret("API_KEY", "   ");
        assert!(config.get_api_key(&env).is_err());

        env.set_secret("API_KEY", "secret-key\n");
        assert_eq!(config.get_api_key(&env).unwrap(), "secret-key");
    }
}
