//! Sub-question parsing for the decomposition stage.
//!
//! The decomposer is asked for a numbered list; whatever comes back is
//! parsed best-effort. Lines without a `<int>.` prefix are dropped and
//! the result is cut to [`MAX_SUB_QUESTIONS`]. Malformed output is never an
//! error: an empty list is a valid outcome.

use regex::Regex;
use std::sync::LazyLock;

/// Upper bound on sub-questions taken from one decomposition.
pub const MAX_SUB_QUESTIONS: usize = 3;

static NUMBERED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+\.\s*(.*)$").expect("numbered-line pattern is valid")
});

/// Parse a numbered list into its item texts.
///
/// Items keep their line order. Items whose text is blank (e.g. a bare
/// `"2."`) are skipped so every returned element is non-empty.
///
/// # Examples
///
/// ```
/// use subquery_domain::pipeline::parsing::parse_numbered_list;
///
/// let subs = parse_numbered_list("1. First\nnoise\n2. Second");
/// assert_eq!(subs, vec!["First", "Second"]);
/// ```
pub fn parse_numbered_list(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| NUMBERED_LINE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|item| item.as_str().trim_end())
        .filter(|item| !item.is_empty())
        .take(MAX_SUB_QUESTIONS)
        .map(str::to_string)
        .collect()
}
