//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod logging;
mod output;
mod providers;

pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use providers::{FileOpenAiConfig, FileProvidersConfig};

use serde::{Deserialize, Serialize};
use subquery_domain::{ConfigIssue, GenerationSettings, OpenAiProviderConfig};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model and sampling settings
    pub generation: FileGenerationConfig,
    /// Provider endpoints and credentials
    pub providers: FileProvidersConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript logging
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// `env` looks up environment variables (used for the API key check).
    pub fn validate(&self, env: impl Fn(&str) -> Option<String>) -> Vec<ConfigIssue> {
        let mut issues = self.generation.validate();
        issues.extend(self.providers.openai.check_api_key(env));
        issues
    }

    pub fn generation_settings(&self) -> GenerationSettings {
        self.generation.to_settings()
    }

    pub fn openai_provider(&self) -> OpenAiProviderConfig {
        self.providers.openai.to_provider_config()
    }
}
