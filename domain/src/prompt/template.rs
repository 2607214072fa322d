//! Prompt templates for the decompose → answer → combine flow

/// Templates for generating prompts at each stage
///
/// The decomposition prompt must keep asking for a numbered list:
/// [`parse_numbered_list`](crate::pipeline::parsing::parse_numbered_list)
/// depends on that shape. The other two outputs are passed on verbatim.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt asking for at most three numbered sub-questions
    pub fn decompose(question: &str) -> String {
        format!(
            r#"You are a reasoning assistant.

Decompose the question below into at most 3 numbered sub-questions.
Only output a numbered list.

Question:
{}
"#,
            question
        )
    }

    /// Prompt asking for a short paragraph plus 2-3 steps
    pub fn answer(sub_question: &str) -> String {
        format!(
            r#"Answer the sub-question below.

Return plain text in this format:

Answer: <one short paragraph>
Steps:
- step 1
- step 2
- step 3

Sub-question:
{}
"#,
            sub_question
        )
    }

    /// Prompt asking for a three-line synthesis
    ///
    /// `subs` and `answers` are the pre-formatted blocks built by
    /// [`format_sub_questions`](crate::pipeline::formatting::format_sub_questions)
    /// and [`join_sub_answers`](crate::pipeline::formatting::join_sub_answers).
    pub fn combine(question: &str, subs: &str, answers: &str) -> String {
        format!(
            r#"You are given:
- the original question
- sub-questions
- their answers

Write a final response in exactly 3 short lines.

Original question:
{}

Sub-questions:
{}

Sub-answers:
{}
"#,
            question, subs, answers
        )
    }
}
