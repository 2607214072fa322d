//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for pipeline results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Question, sub-questions, sub-answers and synthesis
    Full,
    /// Only the final synthesis
    Synthesis,
    /// JSON output (one object per question)
    Json,
}

impl From<OutputFormat> for subquery_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Synthesis => Self::Synthesis,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for subquery
#[derive(Parser, Debug)]
#[command(name = "subquery")]
#[command(author, version, about = "Answer a question by decomposing it into sub-questions")]
#[command(long_about = r#"
subquery answers a question in three steps:
1. Decompose: the model splits the question into at most 3 sub-questions
2. Answer: every sub-question is answered independently, in parallel
3. Combine: the model synthesizes a final answer in 3 short lines

Without a QUESTION, the built-in example questions are run.

Configuration files are loaded from (in priority order):
1. SUBQUERY_* environment variables (e.g. SUBQUERY_GENERATION__MODEL)
2. --config <path>     Explicit config file
3. ./subquery.toml     Project-level config
4. subquery/config.toml in the platform config directory   Global config

The API key is read from $OPENAI_API_KEY unless configured otherwise.

Example:
  subquery "What are the main differences between SQL and NoSQL databases?"
  subquery -m gpt-4.1 -t 0.2 -o synthesis "How does TCP congestion control work?"
"#)]
pub struct Cli {
    /// Questions to answer (the built-in examples run when none are given)
    pub questions: Vec<String>,

    /// Model identifier (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature, 0.0 for the most deterministic output (overrides config)
    #[arg(short, long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Output format (overrides config; default: full)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Append a JSONL transcript of every run to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
