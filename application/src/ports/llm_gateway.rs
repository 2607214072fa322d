//! LLM Gateway port
//!
//! Defines the interface for communicating with the text-generation service.

use async_trait::async_trait;
use subquery_domain::{GenerationSettings, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
///
/// The pipeline never retries or translates these; they reach the caller
/// as-is.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for text generation
///
/// An implementation is configured once with [`GenerationSettings`] and
/// then turns prompts into responses. Implementations (adapters) live in
/// the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Settings every request is sent with
    fn settings(&self) -> &GenerationSettings;

    /// Model every request is sent to
    fn model(&self) -> &Model {
        &self.settings().model
    }

    /// Send one prompt and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}
