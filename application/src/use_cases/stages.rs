//! The three pipeline stages.
//!
//! Each stage is a plain async function of its inputs plus a gateway
//! handle. None of them validate the shape of what the model returns,
//! except decomposition, which parses its numbered list.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::batch::generate_batch;
use std::sync::Arc;
use subquery_domain::{PromptTemplate, Question, Stage, parse_numbered_list};
use tracing::debug;

/// Stage 1: split the question into at most three sub-questions.
///
/// Unparseable output yields fewer (possibly zero) sub-questions, never
/// an error.
pub async fn decompose(
    gateway: &dyn LlmGateway,
    question: &Question,
) -> Result<Vec<String>, GatewayError> {
    let prompt = PromptTemplate::decompose(question.content());
    let raw = gateway.generate(&prompt).await?;

    let sub_questions = parse_numbered_list(&raw);
    debug!(
        "Decomposition: {} lines in, {} sub-questions out",
        raw.lines().count(),
        sub_questions.len()
    );

    Ok(sub_questions)
}

/// Stage 2: answer every sub-question concurrently.
///
/// `answers[i]` is the raw model output for `sub_questions[i]`.
pub async fn answer_all(
    gateway: &Arc<dyn LlmGateway>,
    sub_questions: &[String],
    progress: &dyn ProgressNotifier,
) -> Result<Vec<String>, GatewayError> {
    let prompts = sub_questions
        .iter()
        .map(|sub| PromptTemplate::answer(sub))
        .collect();

    generate_batch(gateway, prompts, Stage::Answer, progress).await
}

/// Stage 3: synthesize the final answer from the formatted blocks.
pub async fn combine(
    gateway: &dyn LlmGateway,
    question: &Question,
    subs: &str,
    answers: &str,
) -> Result<String, GatewayError> {
    let prompt = PromptTemplate::combine(question.content(), subs, answers);
    debug!("Combine prompt: {} bytes", prompt.len());
    gateway.generate(&prompt).await
}
