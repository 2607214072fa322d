//! Structured configuration issues.
//!
//! Config validation never aborts on the first problem; it collects every
//! issue with a severity so the caller can print warnings and stop only on
//! errors.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssueCode {
    /// A model field is present but blank.
    EmptyModelName { field: String },
    /// Temperature outside `0.0..=2.0` or not finite.
    TemperatureOutOfRange { value: f32 },
    /// `max_tokens = 0` would make every request fail.
    ZeroMaxTokens,
    /// No API key in config and the named environment variable is unset.
    MissingApiKey { env_var: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
