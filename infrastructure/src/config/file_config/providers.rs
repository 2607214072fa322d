//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};
use subquery_domain::providers::OPENAI_DEFAULT_BASE_URL;
use subquery_domain::{ConfigIssue, ConfigIssueCode, OpenAiProviderConfig};

/// OpenAI-compatible API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key; prefer the env var.
    pub api_key: Option<String>,
    /// Base URL for the API (override for Azure, proxies or local servers).
    pub base_url: String,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: OPENAI_DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl FileOpenAiConfig {
    pub fn to_provider_config(&self) -> OpenAiProviderConfig {
        OpenAiProviderConfig {
            api_key_env: self.api_key_env.clone(),
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
        }
    }

    /// Warn when no key can be found; local servers may not need one.
    pub fn check_api_key(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<ConfigIssue> {
        if self.to_provider_config().resolve_api_key(lookup).is_some() {
            return None;
        }
        Some(ConfigIssue::warning(
            ConfigIssueCode::MissingApiKey {
                env_var: self.api_key_env.clone(),
            },
            format!(
                "providers.openai: no api_key set and ${} is empty",
                self.api_key_env
            ),
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI-compatible API settings.
    pub openai: FileOpenAiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_a_warning() {
        let config = FileOpenAiConfig::default();
        let issue = config.check_api_key(|_| None).unwrap();
        assert!(!issue.is_error());
        assert!(issue.message.contains("$OPENAI_API_KEY"));
    }

    #[test]
    fn test_env_key_satisfies_check() {
        let config = FileOpenAiConfig::default();
        assert!(config.check_api_key(|_| Some("sk-x".to_string())).is_none());
    }
}
