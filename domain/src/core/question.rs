//! Question value object

use serde::{Deserialize, Serialize};

/// Questions answered when no question is given on the command line.
const BUILTIN_EXAMPLES: &[&str] = &[
    "How does gradient descent work and why is it important in machine learning?",
    "What are the main differences between SQL and NoSQL databases?",
];

/// A user's question to be decomposed and answered (Value Object)
///
/// Lives for exactly one pipeline invocation and is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Question cannot be empty");
        Self { content }
    }

    /// Try to create a new question, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// The built-in example questions
    pub fn builtin_examples() -> Vec<Question> {
        BUILTIN_EXAMPLES.iter().map(|q| Question::new(*q)).collect()
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Question::new(s)
    }
}
