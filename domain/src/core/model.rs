//! Model value object representing a text-generation model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text-generation model identifier (Value Object)
///
/// Known chat models get their own variant; any other identifier is carried
/// through untouched as [`Model::Custom`] so OpenAI-compatible servers with
/// their own naming keep working.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Model {
    #[default]
    Gpt4oMini,
    Gpt4o,
    Gpt41,
    Gpt41Mini,
    Gpt5Mini,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt4o => "gpt-4o",
            Model::Gpt41 => "gpt-4.1",
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::Gpt5Mini => "gpt-5-mini",
            Model::Custom(s) => s,
        }
    }

    /// All models with a dedicated variant
    pub fn known_models() -> Vec<Model> {
        vec![
            Model::Gpt4oMini,
            Model::Gpt4o,
            Model::Gpt41,
            Model::Gpt41Mini,
            Model::Gpt5Mini,
        ]
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Model::Custom(_))
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4o" => Model::Gpt4o,
            "gpt-4.1" => Model::Gpt41,
            "gpt-4.1-mini" => Model::Gpt41Mini,
            "gpt-5-mini" => Model::Gpt5Mini,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // Infallible: unknown names become Custom
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}
