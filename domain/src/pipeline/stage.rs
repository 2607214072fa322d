//! Pipeline stages

use serde::{Deserialize, Serialize};

/// Stage of a pipeline run
///
/// Stages run strictly in order; only [`Stage::Answer`] fans out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Split the question into at most three sub-questions
    Decompose,
    /// Answer every sub-question independently
    Answer,
    /// Synthesize the final three-line response
    Combine,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Decompose => "decompose",
            Stage::Answer => "answer",
            Stage::Combine => "combine",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Stage::Decompose => "Decomposition",
            Stage::Answer => "Sub-question Answers",
            Stage::Combine => "Synthesis",
        }
    }

    /// 1-based position in the pipeline
    pub fn number(&self) -> u8 {
        match self {
            Stage::Decompose => 1,
            Stage::Answer => 2,
            Stage::Combine => 3,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
