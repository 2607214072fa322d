//! Pipeline result value object.

use serde::{Deserialize, Serialize};

/// Complete output of one pipeline run
///
/// `sub_answers[i]` answers `sub_questions[i]`; both have the same length.
/// Answers and the synthesis are kept verbatim as returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// The original question
    pub question: String,
    /// Parsed sub-questions (at most three, possibly none)
    pub sub_questions: Vec<String>,
    /// One raw answer per sub-question, index-aligned
    pub sub_answers: Vec<String>,
    /// Final synthesis text (requested, not guaranteed, to be three lines)
    pub synthesis: String,
}

impl PipelineResult {
    pub fn new(
        question: impl Into<String>,
        sub_questions: Vec<String>,
        sub_answers: Vec<String>,
        synthesis: impl Into<String>,
    ) -> Self {
        debug_assert_eq!(sub_questions.len(), sub_answers.len());
        Self {
            question: question.into(),
            sub_questions,
            sub_answers,
            synthesis: synthesis.into(),
        }
    }

    /// Iterate `(sub_question, sub_answer)` pairs in order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sub_questions
            .iter()
            .zip(&self.sub_answers)
            .map(|(q, a)| (q.as_str(), a.as_str()))
    }

    /// Whether decomposition produced nothing usable
    pub fn is_degenerate(&self) -> bool {
        self.sub_questions.is_empty()
    }

    /// Split into `(sub_questions, sub_answers, synthesis)`
    pub fn into_parts(self) -> (Vec<String>, Vec<String>, String) {
        (self.sub_questions, self.sub_answers, self.synthesis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PipelineResult {
        PipelineResult::new(
            "Q?",
            vec!["a?".to_string(), "b?".to_string()],
            vec!["A".to_string(), "B".to_string()],
            "l1\nl2\nl3",
        )
    }

    #[test]
    fn test_pairs_are_index_aligned() {
        let result = sample();
        let pairs: Vec<_> = result.pairs().collect();
        assert_eq!(pairs, vec![("a?", "A"), ("b?", "B")]);
    }

    #[test]
    fn test_into_parts() {
        let (subs, answers, synthesis) = sample().into_parts();
        assert_eq!(subs.len(), answers.len());
        assert_eq!(synthesis.lines().count(), 3);
    }

    #[test]
    fn test_degenerate() {
        let result = PipelineResult::new("Q?", vec![], vec![], "");
        assert!(result.is_degenerate());
        assert!(!sample().is_degenerate());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["sub_questions"][1], "b?");
        assert_eq!(json["synthesis"], "l1\nl2\nl3");
    }
}
