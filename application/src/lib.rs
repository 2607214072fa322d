//! Application layer for subquery
//!
//! This crate contains the pipeline use case, the stage functions and the
//! port definitions. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::batch::generate_batch;
pub use use_cases::run_pipeline::{RunPipelineError, RunPipelineUseCase};
pub use use_cases::stages::{answer_all, combine, decompose};
