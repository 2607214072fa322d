//! Console output formatter for pipeline results

use colored::Colorize;
use subquery_domain::PipelineResult;

const RULE_WIDTH: usize = 80;

/// Formats pipeline results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colors on or off, overriding terminal detection
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Format the complete pipeline result
    pub fn format(result: &PipelineResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::rule());
        output.push_str(&format!(
            "{} {}\n",
            "QUESTION:".cyan().bold(),
            result.question
        ));

        // Stage 1
        output.push_str(&Self::section_header("Decomposed sub-questions"));
        if result.is_degenerate() {
            output.push_str(&format!("{}\n", "(no sub-questions parsed)".dimmed()));
        }
        for (i, sub) in result.sub_questions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, sub));
        }

        // Stage 2
        output.push_str(&Self::section_header("Sub-answers"));
        for (i, answer) in result.sub_answers.iter().enumerate() {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("[{}]", i + 1).yellow().bold(),
                answer.trim_end()
            ));
        }

        // Stage 3
        output.push_str(&Self::section_header("Final synthesis"));
        output.push_str(result.synthesis.trim_end());
        output.push('\n');

        output
    }

    /// Format as JSON
    pub fn format_json(result: &PipelineResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format synthesis only (concise output)
    pub fn format_synthesis_only(result: &PipelineResult) -> String {
        format!(
            "{} {}\n\n{}\n",
            "Q:".bold(),
            result.question,
            result.synthesis.trim_end()
        )
    }

    fn rule() -> String {
        format!("\n{}\n", "=".repeat(RULE_WIDTH).cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("--- {} ---", title).cyan().bold())
    }
}
