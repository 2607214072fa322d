//! Generation settings value object

use crate::core::error::DomainError;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Highest sampling temperature accepted by OpenAI-compatible services.
pub const MAX_TEMPERATURE: f32 = 2.0;

/// Settings for the text-generation capability (Value Object)
///
/// Built once at startup and handed to the gateway adapter. The pipeline
/// never interprets these values; it only passes them through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Model identifier sent with every request
    pub model: Model,
    /// Sampling temperature (`0.0` = greedy / most deterministic)
    pub temperature: f32,
    /// Upper bound on generated tokens per request (provider default if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: 0.0,
            max_tokens: None,
        }
    }
}

impl GenerationSettings {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            ..Default::default()
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Whether the settings request greedy decoding
    pub fn is_deterministic(&self) -> bool {
        self.temperature == 0.0
    }

    /// Check the settings are usable before the first request goes out
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.temperature.is_finite()
            || !(0.0..=MAX_TEMPERATURE).contains(&self.temperature)
        {
            return Err(DomainError::InvalidTemperature(self.temperature));
        }
        if self.model.as_str().trim().is_empty() {
            return Err(DomainError::InvalidModel(
                "model name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_deterministic() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.model, Model::Gpt4oMini);
        assert!(settings.is_deterministic());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let settings = GenerationSettings::new(Model::Gpt41)
            .with_temperature(0.7)
            .with_max_tokens(512);
        assert!(!settings.is_deterministic());
        assert_eq!(settings.max_tokens, Some(512));
    }

    #[test]
    fn test_rejects_out_of_range_temperature() {
        for temperature in [-0.1, 2.5, f32::NAN, f32::INFINITY] {
            let settings = GenerationSettings::default().with_temperature(temperature);
            assert!(matches!(
                settings.validate(),
                Err(DomainError::InvalidTemperature(_))
            ));
        }
    }

    #[test]
    fn test_rejects_blank_custom_model() {
        let settings = GenerationSettings::new(Model::Custom("  ".to_string()));
        assert!(matches!(
            settings.validate(),
            Err(DomainError::InvalidModel(_))
        ));
    }
}
