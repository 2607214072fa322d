//! Domain layer for subquery
//!
//! This crate contains the core value objects, prompt templates and the
//! sub-question parser. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! A [`Question`] goes through three stages ([`Stage`]):
//!
//! - **Decompose**: the model lists at most three numbered sub-questions,
//!   parsed by [`parse_numbered_list`]
//! - **Answer**: each sub-question is answered independently
//! - **Combine**: the model writes a three-line synthesis
//!
//! The outcome of one run is a [`PipelineResult`].

pub mod config;
pub mod core;
pub mod pipeline;
pub mod prompt;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError, model::Model, question::Question, settings::GenerationSettings,
};
pub use pipeline::{
    formatting::{format_sub_questions, join_sub_answers},
    parsing::{MAX_SUB_QUESTIONS, parse_numbered_list},
    stage::Stage,
    value_objects::PipelineResult,
};
pub use prompt::PromptTemplate;
pub use providers::OpenAiProviderConfig;
