//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for pipeline results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Question, sub-questions, sub-answers and synthesis (default)
    #[default]
    Full,
    /// Only the final synthesis
    Synthesis,
    /// JSON output
    Json,
}
