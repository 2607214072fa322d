//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of provider settings without depending
//! on any serialization format (TOML, JSON, etc.).

/// Default base URL of the OpenAI API.
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// OpenAI-compatible API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiProviderConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key; prefer the env var.
    pub api_key: Option<String>,
    /// Base URL without the `/v1/...` path; override for local or proxy servers.
    pub base_url: String,
}

impl Default for OpenAiProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: OPENAI_DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl OpenAiProviderConfig {
    /// Resolve the API key: explicit key first, then the named variable.
    ///
    /// `lookup` abstracts the environment so callers and tests can supply
    /// their own source. Blank values count as missing.
    pub fn resolve_api_key(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| lookup(&self.api_key_env))
            .filter(|key| !key.trim().is_empty())
    }
}
