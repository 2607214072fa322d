//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// ```toml
/// [logging]
/// conversation_log = "~/.local/state/subquery/transcript.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of every pipeline run (disabled when unset)
    pub conversation_log: Option<String>,
}

impl FileLoggingConfig {
    /// Transcript path with a leading `~/` expanded to the home directory.
    pub fn conversation_log_path(&self) -> Option<PathBuf> {
        let raw = self.conversation_log.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_or_blank_disables_log() {
        assert!(FileLoggingConfig::default().conversation_log_path().is_none());
        let blank = FileLoggingConfig {
            conversation_log: Some(" ".to_string()),
        };
        assert!(blank.conversation_log_path().is_none());
    }

    #[test]
    fn test_plain_path() {
        let config = FileLoggingConfig {
            conversation_log: Some("logs/run.jsonl".to_string()),
        };
        assert_eq!(
            config.conversation_log_path(),
            Some(PathBuf::from("logs/run.jsonl"))
        );
    }

    #[test]
    fn test_tilde_expansion() {
        let config = FileLoggingConfig {
            conversation_log: Some("~/run.jsonl".to_string()),
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.conversation_log_path(), Some(home.join("run.jsonl")));
        }
    }
}
