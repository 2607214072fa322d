//! Generation settings from TOML (`[generation]` section)

use serde::{Deserialize, Deserializer, Serialize};
use subquery_domain::core::settings::MAX_TEMPERATURE;
use subquery_domain::{ConfigIssue, ConfigIssueCode, GenerationSettings, Model};

/// Raw generation configuration from TOML
///
/// # Example
///
/// ```toml
/// [generation]
/// model = "gpt-4o-mini"
/// temperature = 0.0
/// max_tokens = 1024
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Model identifier (unknown names are passed through as custom models)
    #[serde(deserialize_with = "model_name")]
    pub model: Option<String>,
    /// Sampling temperature, `0.0` for the most deterministic output
    pub temperature: Option<f32>,
    /// Per-request token limit
    pub max_tokens: Option<u32>,
}

/// Read the model name as text even when it looks like a number.
///
/// Environment overrides are parsed, so `SUBQUERY_GENERATION__MODEL=4`
/// arrives as an integer. Quote the value (`'"4.10"'`) to keep it verbatim.
fn model_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawName {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(
        Option::<RawName>::deserialize(deserializer)?.map(|raw| match raw {
            RawName::Text(name) => name,
            RawName::Integer(n) => n.to_string(),
            RawName::Float(f) => f.to_string(),
        }),
    )
}

impl FileGenerationConfig {
    /// Build domain settings, falling back to defaults for unset or blank fields.
    pub fn to_settings(&self) -> GenerationSettings {
        let mut settings = GenerationSettings::default();

        if let Some(name) = self.model.as_deref().filter(|s| !s.trim().is_empty()) {
            let Ok(model) = name.trim().parse::<Model>();
            settings.model = model;
        }
        if let Some(temperature) = self.temperature {
            settings.temperature = temperature;
        }
        settings.max_tokens = self.max_tokens;

        settings
    }

    /// Replace file values with command-line overrides, before validation.
    pub fn apply_overrides(&mut self, model: Option<&str>, temperature: Option<f32>) {
        if let Some(model) = model {
            self.model = Some(model.to_string());
        }
        if let Some(temperature) = temperature {
            self.temperature = Some(temperature);
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if matches!(&self.model, Some(s) if s.trim().is_empty()) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: "generation.model".to_string(),
                },
                "generation.model: model name cannot be empty",
            ));
        }

        if let Some(t) = self.temperature
            && (!t.is_finite() || !(0.0..=MAX_TEMPERATURE).contains(&t))
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::TemperatureOutOfRange { value: t },
                format!(
                    "generation.temperature: {} is outside 0.0..={}",
                    t, MAX_TEMPERATURE
                ),
            ));
        }

        if self.max_tokens == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroMaxTokens,
                "generation.max_tokens: must be greater than 0",
            ));
        }

        issues
    }
}
