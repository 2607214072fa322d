//! Run Pipeline use case
//!
//! Drives one question through decompose → answer → combine.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::stages::{answer_all, combine, decompose};
use serde_json::json;
use std::sync::Arc;
use subquery_domain::{PipelineResult, Question, Stage, format_sub_questions, join_sub_answers};
use thiserror::Error;
use tracing::info;

/// Errors that can occur during a pipeline run
#[derive(Error, Debug)]
pub enum RunPipelineError {
    /// The text-generation service failed; the message is passed through as-is
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Use case for answering a question via sub-questions
///
/// Stateless between runs: the same use case can serve any number of
/// questions, one after the other or concurrently.
pub struct RunPipelineUseCase {
    gateway: Arc<dyn LlmGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RunPipelineUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, question: &Question) -> Result<PipelineResult, RunPipelineError> {
        self.execute_with_progress(question, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        question: &Question,
        progress: &dyn ProgressNotifier,
    ) -> Result<PipelineResult, RunPipelineError> {
        info!(question = %question, model = %self.gateway.model(), "Starting pipeline");
        self.conversation_logger.log(ConversationEvent::new(
            "pipeline_started",
            json!({
                "question": question.content(),
                "model": self.gateway.model().as_str(),
                "temperature": self.gateway.settings().temperature,
            }),
        ));

        // Stage 1: Decompose
        let sub_questions = self.stage_decompose(question, progress).await?;

        // Stage 2: Answer (fan-out / fan-in)
        let sub_answers = self.stage_answer(&sub_questions, progress).await?;

        // Stage 3: Combine
        let synthesis = self
            .stage_combine(question, &sub_questions, &sub_answers, progress)
            .await?;

        Ok(PipelineResult::new(
            question.content(),
            sub_questions,
            sub_answers,
            synthesis,
        ))
    }

    async fn stage_decompose(
        &self,
        question: &Question,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<String>, RunPipelineError> {
        info!("Stage 1: Decompose");
        progress.on_stage_start(Stage::Decompose, 1);

        let result = decompose(self.gateway.as_ref(), question).await;
        progress.on_task_complete(Stage::Decompose, 0, result.is_ok());
        let sub_questions = result?;

        progress.on_stage_complete(Stage::Decompose);
        info!("Decomposed into {} sub-questions", sub_questions.len());
        self.conversation_logger.log(ConversationEvent::new(
            "sub_questions_parsed",
            json!({ "sub_questions": sub_questions }),
        ));

        Ok(sub_questions)
    }

    async fn stage_answer(
        &self,
        sub_questions: &[String],
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<String>, RunPipelineError> {
        info!("Stage 2: Answer {} sub-questions", sub_questions.len());
        progress.on_stage_start(Stage::Answer, sub_questions.len());

        let sub_answers = answer_all(&self.gateway, sub_questions, progress).await?;

        progress.on_stage_complete(Stage::Answer);
        for (index, (sub_question, answer)) in sub_questions.iter().zip(&sub_answers).enumerate() {
            self.conversation_logger.log(ConversationEvent::new(
                "sub_answer",
                json!({
                    "index": index,
                    "sub_question": sub_question,
                    "answer": answer,
                }),
            ));
        }

        Ok(sub_answers)
    }

    async fn stage_combine(
        &self,
        question: &Question,
        sub_questions: &[String],
        sub_answers: &[String],
        progress: &dyn ProgressNotifier,
    ) -> Result<String, RunPipelineError> {
        info!("Stage 3: Combine");
        progress.on_stage_start(Stage::Combine, 1);

        let subs = format_sub_questions(sub_questions);
        let answers = join_sub_answers(sub_answers);

        let result = combine(self.gateway.as_ref(), question, &subs, &answers).await;
        progress.on_task_complete(Stage::Combine, 0, result.is_ok());
        let synthesis = result?;

        progress.on_stage_complete(Stage::Combine);
        self.conversation_logger.log(ConversationEvent::new(
            "synthesis",
            json!({ "synthesis": synthesis }),
        ));

        Ok(synthesis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;
    use subquery_domain::GenerationSettings;

    // ==================== Test Mocks ====================

    /// Routes prompts by stage and answers sub-questions slowest-first.
    struct ScriptedGateway {
        settings: GenerationSettings,
        decomposition: String,
        synthesis: String,
        fail_on: Option<Stage>,
        prompts: Mutex<Vec<(Stage, String)>>,
    }

    impl ScriptedGateway {
        fn new(decomposition: &str) -> Self {
            Self {
                settings: GenerationSettings::default(),
                decomposition: decomposition.to_string(),
                synthesis: "Line one.\nLine two.\nLine three.".to_string(),
                fail_on: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing_on(mut self, stage: Stage) -> Self {
            self.fail_on = Some(stage);
            self
        }

        fn stage_of(prompt: &str) -> Stage {
            if prompt.contains("Decompose the question") {
                Stage::Decompose
            } else if prompt.contains("Answer the sub-question") {
                Stage::Answer
            } else {
                Stage::Combine
            }
        }

        fn prompts_for(&self, stage: Stage) -> Vec<String> {
            self.prompts
                .lock()
                .unwrap()
                .iter()
                .filter(|(s, _)| *s == stage)
                .map(|(_, p)| p.clone())
                .collect()
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        fn settings(&self) -> &GenerationSettings {
            &self.settings
        }

        async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
            let stage = Self::stage_of(prompt);
            self.prompts
                .lock()
                .unwrap()
                .push((stage, prompt.to_string()));

            if self.fail_on == Some(stage) {
                return Err(GatewayError::RateLimited("slow down".to_string()));
            }

            match stage {
                Stage::Decompose => Ok(self.decomposition.clone()),
                Stage::Answer => {
                    let sub = prompt.trim_end().lines().last().unwrap_or_default();
                    // Earlier sub-questions finish later
                    let delay = match sub {
                        "Data model?" => 90,
                        "Scalability?" => 45,
                        _ => 0,
                    };
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    Ok(format!("Answer: about {}\nSteps:\n- one\n- two", sub))
                }
                Stage::Combine => Ok(self.synthesis.clone()),
            }
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        calls: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_stage_start(&self, stage: Stage, total_tasks: usize) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("start {} {}", stage.as_str(), total_tasks));
        }

        fn on_task_complete(&self, stage: Stage, index: usize, success: bool) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("task {} {} {}", stage.as_str(), index, success));
        }

        fn on_stage_complete(&self, stage: Stage) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("done {}", stage.as_str()));
        }
    }

    const SQL_DECOMPOSITION: &str =
        "1. Data model?\n2. Scalability?\n3. Consistency?";

    fn use_case(gateway: Arc<ScriptedGateway>) -> RunPipelineUseCase {
        RunPipelineUseCase::new(gateway)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_end_to_end_shape() {
        let gateway = Arc::new(ScriptedGateway::new(SQL_DECOMPOSITION));
        let question =
            Question::new("What are the main differences between SQL and NoSQL databases?");

        let result = use_case(gateway.clone()).execute(&question).await.unwrap();

        assert_eq!(result.question, question.content());
        assert_eq!(
            result.sub_questions,
            vec!["Data model?", "Scalability?", "Consistency?"]
        );
        assert_eq!(result.sub_answers.len(), result.sub_questions.len());
        assert!(!result.synthesis.is_empty());
        assert_eq!(result.synthesis.lines().count(), 3);
        assert_eq!(gateway.prompts_for(Stage::Answer).len(), 3);
    }

    #[tokio::test]
    async fn test_answers_stay_aligned_with_sub_questions() {
        let gateway = Arc::new(ScriptedGateway::new(SQL_DECOMPOSITION));

        let result = use_case(gateway)
            .execute(&Question::new("SQL or NoSQL?"))
            .await
            .unwrap();

        for (sub, answer) in result.pairs() {
            assert!(
                answer.starts_with(&format!("Answer: about {}", sub)),
                "{sub} got {answer}"
            );
        }
    }

    #[tokio::test]
    async fn test_combiner_receives_formatted_blocks() {
        let gateway = Arc::new(ScriptedGateway::new("1. A\n2. B"));

        let result = use_case(gateway.clone())
            .execute(&Question::new("Q?"))
            .await
            .unwrap();

        let combine_prompts = gateway.prompts_for(Stage::Combine);
        assert_eq!(combine_prompts.len(), 1);
        assert!(combine_prompts[0].contains("Sub-questions:\n1. A\n2. B\n"));
        let expected_answers = result.sub_answers.join("\n\n");
        assert!(combine_prompts[0].contains(&expected_answers));
    }

    #[tokio::test]
    async fn test_empty_decomposition_still_combines() {
        let gateway = Arc::new(ScriptedGateway::new("Sorry, I can't do that."));

        let result = use_case(gateway.clone())
            .execute(&Question::new("Q?"))
            .await
            .unwrap();

        let (subs, answers, synthesis) = result.into_parts();
        assert!(subs.is_empty());
        assert!(answers.is_empty());
        assert_eq!(synthesis, "Line one.\nLine two.\nLine three.");
        assert!(gateway.prompts_for(Stage::Answer).is_empty());

        let combine_prompts = gateway.prompts_for(Stage::Combine);
        assert!(combine_prompts[0].contains("Sub-questions:\n\n\nSub-answers:\n\n"));
    }

    #[tokio::test]
    async fn test_answer_failure_propagates_unchanged() {
        let gateway = Arc::new(ScriptedGateway::new(SQL_DECOMPOSITION).failing_on(Stage::Answer));

        let err = use_case(gateway.clone())
            .execute(&Question::new("Q?"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RunPipelineError::Gateway(GatewayError::RateLimited(_))
        ));
        assert_eq!(err.to_string(), "Rate limited: slow down");
        assert!(gateway.prompts_for(Stage::Combine).is_empty());
    }

    #[tokio::test]
    async fn test_decompose_failure_stops_pipeline() {
        let gateway =
            Arc::new(ScriptedGateway::new(SQL_DECOMPOSITION).failing_on(Stage::Decompose));

        let result = use_case(gateway.clone())
            .execute(&Question::new("Q?"))
            .await;

        assert!(result.is_err());
        assert!(gateway.prompts_for(Stage::Answer).is_empty());
    }

    #[tokio::test]
    async fn test_progress_callbacks_in_stage_order() {
        let gateway = Arc::new(ScriptedGateway::new("1. A"));
        let progress = RecordingProgress::default();

        use_case(gateway)
            .execute_with_progress(&Question::new("Q?"), &progress)
            .await
            .unwrap();

        assert_eq!(
            *progress.calls.lock().unwrap(),
            vec![
                "start decompose 1",
                "task decompose 0 true",
                "done decompose",
                "start answer 1",
                "task answer 0 true",
                "done answer",
                "start combine 1",
                "task combine 0 true",
                "done combine",
            ]
        );
    }

    #[tokio::test]
    async fn test_conversation_events_logged() {
        let gateway = Arc::new(ScriptedGateway::new("1. A\n2. B"));
        let logger = Arc::new(RecordingLogger::default());

        use_case(gateway)
            .with_conversation_logger(logger.clone())
            .execute(&Question::new("Q?"))
            .await
            .unwrap();

        assert_eq!(
            *logger.events.lock().unwrap(),
            vec![
                "pipeline_started",
                "sub_questions_parsed",
                "sub_answer",
                "sub_answer",
                "synthesis",
            ]
        );
    }
}
