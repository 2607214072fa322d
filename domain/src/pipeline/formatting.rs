//! Combiner input formatting.

/// Render sub-questions as a 1-indexed numbered list, one per line.
pub fn format_sub_questions(sub_questions: &[String]) -> String {
    sub_questions
        .iter()
        .enumerate()
        .map(|(i, sub)| format!("{}. {}", i + 1, sub))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join sub-answers with a blank line between each.
pub fn join_sub_answers(sub_answers: &[String]) -> String {
    sub_answers.join("\n\n")
}
