//! CLI entrypoint for subquery
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use subquery_application::{NoProgress, ProgressNotifier, RunPipelineUseCase};
use subquery_domain::{DomainError, GenerationSettings, OutputFormat, Question, Severity};
use subquery_infrastructure::{ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiGateway};
use subquery_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting subquery");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    let settings = resolve_settings(&cli, &mut config)?;

    if cli.no_color || !config.output.color {
        ConsoleFormatter::set_color(false);
    }
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    let questions = resolve_questions(&cli.questions)?;

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiGateway::new(settings, &config.openai_provider()));
    let mut use_case = RunPipelineUseCase::new(gateway);

    if let Some(path) = cli
        .conversation_log
        .clone()
        .or_else(|| config.logging.conversation_log_path())
    {
        let logger = JsonlConversationLogger::open(&path)
            .with_context(|| format!("Could not open conversation log {}", path.display()))?;
        info!("Writing conversation log to {}", logger.path().display());
        use_case = use_case.with_conversation_logger(Arc::new(logger));
    }

    let progress: Box<dyn ProgressNotifier> = if cli.quiet || format == OutputFormat::Json {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    // === Run ===
    for question in &questions {
        let result = use_case
            .execute_with_progress(question, progress.as_ref())
            .await?;

        let output = match format {
            OutputFormat::Full => ConsoleFormatter::format(&result),
            OutputFormat::Synthesis => ConsoleFormatter::format_synthesis_only(&result),
            OutputFormat::Json => ConsoleFormatter::format_json(&result),
        };

        println!("{}", output);
    }

    Ok(())
}

/// Print every config issue; fail if any of them is an error.
///
/// Runs after command-line overrides are applied, so a flag can fix an
/// invalid file value.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate(|name| std::env::var(name).ok());

    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("config error: {}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }

    if issues.iter().any(|issue| issue.is_error()) {
        bail!("Invalid configuration");
    }
    Ok(())
}

/// Apply command-line overrides to the config, validate the merged result
/// and build the generation settings from it.
fn resolve_settings(cli: &Cli, config: &mut FileConfig) -> Result<GenerationSettings> {
    config
        .generation
        .apply_overrides(cli.model.as_deref(), cli.temperature);
    check_config(config)?;

    let settings = config.generation_settings();
    settings.validate()?;
    Ok(settings)
}

/// Questions from the command line, or the built-in examples when none.
fn resolve_questions(args: &[String]) -> Result<Vec<Question>, DomainError> {
    if args.is_empty() {
        return Ok(Question::builtin_examples());
    }

    args.iter()
        .map(|arg| {
            Question::try_new(arg.as_str())
                .ok_or_else(|| DomainError::InvalidQuestion("question cannot be empty".to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use subquery_domain::Model;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("subquery").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_overrides_config_settings() {
        let mut config = FileConfig::default();
        let settings = resolve_settings(&cli(&["-m", "gpt-4.1", "-t", "0.7"]), &mut config).unwrap();
        assert_eq!(settings.model, Model::Gpt41);
        assert_eq!(settings.temperature, 0.7);
    }

    #[test]
    fn test_out_of_range_cli_temperature_is_rejected() {
        let mut config = FileConfig::default();
        assert!(resolve_settings(&cli(&["-t", "5"]), &mut config).is_err());
    }

    #[test]
    fn test_cli_temperature_fixes_invalid_file_value() {
        let mut config = FileConfig::default();
        config.generation.temperature = Some(3.0);
        assert!(resolve_settings(&cli(&[]), &mut config.clone()).is_err());

        let settings = resolve_settings(&cli(&["-t", "0.2"]), &mut config).unwrap();
        assert_eq!(settings.temperature, 0.2);
    }

    #[test]
    fn test_no_questions_uses_examples() {
        let questions = resolve_questions(&[]).unwrap();
        assert_eq!(questions, Question::builtin_examples());
    }

    #[test]
    fn test_blank_question_is_rejected() {
        let err = resolve_questions(&["  ".to_string()]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuestion(_)));
    }
}
